//! Item colour carried by the `Colour` parameter.

use crate::error::{Error, Result};
use crate::parameter::ParameterValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ARGB item colour, packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemColour(u32);

impl ItemColour {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for ItemColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for ItemColour {
    type Err = Error;

    /// Parses `#AARRGGBB` or `#RRGGBB` (opaque).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColour(s.to_owned()))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColour(s.to_owned()))?;
        match hex.len() {
            8 => Ok(Self(value)),
            6 => Ok(Self(0xff00_0000 | value)),
            _ => Err(Error::InvalidColour(s.to_owned())),
        }
    }
}

impl From<ItemColour> for ParameterValue {
    fn from(colour: ItemColour) -> Self {
        ParameterValue::UInt(colour.argb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = ItemColour::from_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.argb(), 0x7812_3456);
        assert_eq!(c.alpha(), 0x78);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0x34);
        assert_eq!(c.blue(), 0x56);
    }

    #[test]
    fn test_display_and_parse() {
        let c = ItemColour::from_argb(0xff20_a0c0);
        assert_eq!(c.to_string(), "#FF20A0C0");
        assert_eq!("#FF20A0C0".parse::<ItemColour>().unwrap(), c);
        assert_eq!("#20a0c0".parse::<ItemColour>().unwrap(), c);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("FF20A0C0".parse::<ItemColour>().is_err());
        assert!("#12345".parse::<ItemColour>().is_err());
        assert!("#GGGGGG".parse::<ItemColour>().is_err());
    }

    #[test]
    fn test_colour_travels_as_uint() {
        let value: ParameterValue = ItemColour::from_argb(0xff00_00ff).into();
        assert_eq!(value.as_uint(), Some(0xff00_00ff));
    }
}
