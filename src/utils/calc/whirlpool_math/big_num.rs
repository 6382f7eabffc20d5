//! 256 and 512 bit unsigned integers used as multiply-then-divide intermediates.
//!
//! A Q64.64 sqrt price times another sqrt price already needs 256 bits, and
//! the token A formulas multiply a third 128/192-bit factor on top of that,
//! so those paths run in `U512`.

use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}
