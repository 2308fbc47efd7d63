//! Named aliases for common scalar and size pairs.

use crate::vector::Vector;

macro_rules! aliases {
    ($($t:ty => $two:ident, $three:ident, $four:ident;)*) => {$(
        pub type $two = Vector<$t, 2>;
        pub type $three = Vector<$t, 3>;
        pub type $four = Vector<$t, 4>;
    )*};
}

aliases! {
    bool => Bool2, Bool3, Bool4;
    i8 => Char2, Char3, Char4;
    u8 => UChar2, UChar3, UChar4;
    i16 => Short2, Short3, Short4;
    u16 => UShort2, UShort3, UShort4;
    i32 => Int2, Int3, Int4;
    u32 => UInt2, UInt3, UInt4;
    i64 => Long2, Long3, Long4;
    u64 => ULong2, ULong3, ULong4;
    f32 => Float2, Float3, Float4;
    f64 => Double2, Double3, Double4;
}
