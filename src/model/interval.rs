use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// History bucket size accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    M1,
    M5,
    M15,
    M30,
    H1,
    H2,
    H6,
    H12,
    D1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::M1 => "m1",
            Interval::M5 => "m5",
            Interval::M15 => "m15",
            Interval::M30 => "m30",
            Interval::H1 => "h1",
            Interval::H2 => "h2",
            Interval::H6 => "h6",
            Interval::H12 => "h12",
            Interval::D1 => "d1",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m1" => Ok(Interval::M1),
            "m5" => Ok(Interval::M5),
            "m15" => Ok(Interval::M15),
            "m30" => Ok(Interval::M30),
            "h1" => Ok(Interval::H1),
            "h2" => Ok(Interval::H2),
            "h6" => Ok(Interval::H6),
            "h12" => Ok(Interval::H12),
            "d1" => Ok(Interval::D1),
            other => Err(format!(
                "unknown interval '{other}', expected one of m1,m5,m15,m30,h1,h2,h6,h12,d1"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_serde() {
        let i: Interval = serde_json::from_str("\"h1\"").unwrap();
        assert_eq!(i, Interval::H1);
        assert_eq!(serde_json::to_string(&i).unwrap(), "\"h1\"");
    }

    #[test]
    fn rejects_unknown_interval() {
        assert!("h3".parse::<Interval>().is_err());
    }
}
