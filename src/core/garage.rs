use itertools::Itertools;

use crate::{
    core::{
        calculator::calculate,
        powertrain::Powertrain,
        preset::PresetBook,
        profile::VehicleProfile,
        update::Update,
    },
    prelude::*,
};

/// Ordered collection of the vehicles under comparison, owned by a session.
///
/// Never empty. Vehicles are addressed by their zero-based position.
#[must_use]
pub struct Garage {
    presets: PresetBook,
    profiles: Vec<VehicleProfile>,
}

impl Garage {
    /// Start with a default vehicle for each of the powertrains, or a single combustion one.
    pub fn new(presets: PresetBook, powertrains: impl IntoIterator<Item = Powertrain>) -> Self {
        let mut this = Self { presets, profiles: Vec::new() };
        for powertrain in powertrains {
            this.add(powertrain);
        }
        if this.profiles.is_empty() {
            this.add(Powertrain::Ice);
        }
        this
    }

    #[must_use]
    pub fn profiles(&self) -> &[VehicleProfile] {
        &self.profiles
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Append a default vehicle and return its index.
    pub fn add(&mut self, powertrain: Powertrain) -> usize {
        let index = self.profiles.len();
        let name = format!("Car {}", index + 1);
        self.profiles.push(VehicleProfile::new(name, powertrain, &self.presets));
        debug!(index, %powertrain, "added");
        index
    }

    /// Remove the vehicle, unless it is the last one left.
    ///
    /// Returns the removed profile, or `None` when nothing has been removed.
    pub fn remove(&mut self, index: usize) -> Result<Option<VehicleProfile>> {
        ensure!(index < self.profiles.len(), "there is no vehicle #{}", index + 1);
        if self.profiles.len() == 1 {
            warn!("refusing to remove the last vehicle");
            return Ok(None);
        }
        Ok(Some(self.profiles.remove(index)))
    }

    /// Apply the update to the vehicle, leaving the others intact.
    ///
    /// The updated profile is computed in full first and then replaces the old one.
    pub fn update(&mut self, index: usize, update: Update) -> Result<&VehicleProfile> {
        let profile = self
            .profiles
            .get_mut(index)
            .with_context(|| format!("there is no vehicle #{}", index + 1))?;
        *profile = profile.clone().with(update, &self.presets);
        Ok(&*profile)
    }

    /// Index of the vehicle with the lowest total cost of ownership.
    #[must_use]
    pub fn cheapest(&self) -> Option<usize> {
        self.profiles.iter().position_min_by_key(|profile| calculate(profile).total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FuelMode, update::Field};

    #[test]
    fn test_new_is_never_empty() {
        let garage = Garage::new(PresetBook::default(), []);
        assert_eq!(garage.len(), 1);
        assert_eq!(garage.profiles()[0].powertrain, Powertrain::Ice);
        assert_eq!(garage.profiles()[0].name, "Car 1");
    }

    #[test]
    fn test_add() {
        let mut garage = Garage::new(PresetBook::default(), [Powertrain::Ice]);
        assert_eq!(garage.add(Powertrain::Ev), 1);
        assert_eq!(garage.len(), 2);
        assert_eq!(garage.profiles()[1].name, "Car 2");
        assert_eq!(garage.profiles()[1].powertrain, Powertrain::Ev);
    }

    #[test]
    fn test_remove_last_is_noop() -> Result {
        let mut garage = Garage::new(PresetBook::default(), []);
        assert!(garage.remove(0)?.is_none());
        assert_eq!(garage.len(), 1);
        Ok(())
    }

    #[test]
    fn test_remove_by_position() -> Result {
        let mut garage =
            Garage::new(PresetBook::default(), [Powertrain::Ice, Powertrain::Hybrid, Powertrain::Ev]);
        let removed = garage.remove(1)?.context("nothing removed")?;
        assert_eq!(removed.powertrain, Powertrain::Hybrid);
        assert_eq!(
            garage.profiles().iter().map(|profile| profile.powertrain).collect_vec(),
            [Powertrain::Ice, Powertrain::Ev],
        );
        Ok(())
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut garage = Garage::new(PresetBook::default(), [Powertrain::Ice, Powertrain::Ev]);
        assert!(garage.remove(2).is_err());
        assert_eq!(garage.len(), 2);
    }

    #[test]
    fn test_update_is_isolated() -> Result {
        let mut garage = Garage::new(PresetBook::default(), [Powertrain::Ice, Powertrain::Ice]);
        let untouched = garage.profiles()[1].clone();
        garage.update(0, Update::Powertrain(Powertrain::Ev))?;
        garage.update(0, Update::FuelMode(FuelMode::Highway))?;
        garage.update(0, Update::Set(Field::CarPrice, 1_500_000.0))?;
        assert_eq!(garage.profiles()[0].powertrain, Powertrain::Ev);
        assert_eq!(garage.profiles()[1], untouched);
        Ok(())
    }

    #[test]
    fn test_update_out_of_range() {
        let mut garage = Garage::new(PresetBook::default(), []);
        assert!(garage.update(1, Update::Rename("Nope".to_owned())).is_err());
    }

    #[test]
    fn test_cheapest() -> Result {
        let mut garage = Garage::new(PresetBook::default(), [Powertrain::Ice, Powertrain::Ice]);
        garage.update(1, Update::Set(Field::Discount, 100_000.0))?;
        assert_eq!(garage.cheapest(), Some(1));
        Ok(())
    }
}
