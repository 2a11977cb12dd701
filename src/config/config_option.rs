use crate::{misc::log::targets::{self}, types::err::ConfigError};

/// A named configuration value, together with the bounds on that value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, so long as the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        let (min, max) = self.min_max();
        if value < min || max < value {
            log::warn!(target: targets::CONFIG, "Value for {} out of bounds", self.name);
            return Err(ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
