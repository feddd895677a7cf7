use std::sync::Arc;

use arrow_array::{Array, ArrayRef, UInt32Array};
use arrow_schema::DataType;
use tessera_common::Result;

use crate::loggable::{Loggable, downcast_array};

/// An RGBA color, packed into a `u32` as `0xRRGGBBAA`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba32(pub u32);

impl Rgba32 {
    pub fn from_unmultiplied_rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba32 {
        Rgba32(u32::from_be_bytes([r, g, b, a]))
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn b(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn a(&self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Rgba32 {
    fn from(rgba: u32) -> Self {
        Rgba32(rgba)
    }
}

impl From<[u8; 4]> for Rgba32 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba32::from_unmultiplied_rgba(r, g, b, a)
    }
}

impl Loggable for Rgba32 {
    const TYPE_NAME: &'static str = "tessera.datatypes.Rgba32";

    fn arrow_datatype() -> DataType {
        DataType::UInt32
    }

    fn to_arrow_opt(values: impl IntoIterator<Item = Option<Self>>) -> Result<ArrayRef> {
        let array: UInt32Array = values.into_iter().map(|v| v.map(|v| v.0)).collect();
        Ok(Arc::new(array))
    }

    fn from_arrow_opt(array: &dyn Array) -> Result<Vec<Option<Self>>> {
        let array = downcast_array::<UInt32Array>(array, Self::TYPE_NAME)?;
        Ok(array.iter().map(|v| v.map(Rgba32)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_packing() {
        let color = Rgba32::from_unmultiplied_rgba(0xcc, 0x00, 0xcc, 0xff);
        assert_eq!(color.0, 0xcc00ccff);
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (0xcc, 0, 0xcc, 0xff));
    }

    #[test]
    fn test_round_trip() {
        let values = vec![Rgba32::from([0, 0, 255, 255]), Rgba32(0)];
        let array = Rgba32::to_arrow(&values).unwrap();
        assert_eq!(Rgba32::from_arrow(array.as_ref()).unwrap(), values);
    }
}
