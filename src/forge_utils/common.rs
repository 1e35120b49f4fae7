use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSpec {
    pub path: Option<PathBuf>,
    pub name: String,
}

impl ContractSpec {
    pub fn path_name(path: PathBuf, name: impl ToString) -> Self {
        Self {
            path: Some(path),
            name: name.to_string(),
        }
    }

    pub fn name(name: impl ToString) -> Self {
        Self {
            path: None,
            name: name.to_string(),
        }
    }
}

/// Accepts forge's `<path>:<ContractName>` or a bare contract name
impl FromStr for ContractSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.rsplit_once(':') {
            Some((path, name)) => Self::path_name(PathBuf::from(path), name),
            None => Self::name(s),
        })
    }
}

impl fmt::Display for ContractSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = self.path.as_deref() {
            write!(f, "{}:{}", path.display(), self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
