use std::num::ParseIntError;

use shrinkwraprs::Shrinkwrap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositiveError {
    #[error("Please enter a positive integer.")]
    NotPositive,
    #[error("Please enter a positive integer. ({0})")]
    Invalid(#[from] ParseIntError),
}

/// Positive integer newtypes, zero is rejected at parse time
macro_rules! impl_positive_num {
    (pub struct $outer:ident($tname:ty)) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Shrinkwrap,
        )]
        pub struct $outer(pub $tname);

        impl std::fmt::Display for $outer {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $outer {
            type Err = ParsePositiveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: $tname = s.trim().parse()?;

                if value == 0 {
                    return Err(ParsePositiveError::NotPositive);
                }

                Ok(Self(value))
            }
        }
    };
}

impl_positive_num!(pub struct DeployCount(u64));
impl_positive_num!(pub struct Supply(u64));

/// Inclusive supply bounds, `min <= max` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyRange {
    min: Supply,
    max: Supply,
}

impl SupplyRange {
    pub fn new(min: Supply, max: Supply) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> Supply {
        self.min
    }

    pub fn max(&self) -> Supply {
        self.max
    }
}

impl std::fmt::Display for SupplyRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} and {} (inclusive)", self.min, self.max)
    }
}
