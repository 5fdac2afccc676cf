//! Compile-time constants as zero-sized types
//!
//! A [`Const`] marker names a fixed value of some type without storing it.
//! Predicates such as [`CharEq`](crate::refined::CharEq) or
//! [`GreaterThan`](crate::refined::GreaterThan) take their bounds as
//! constant markers, so the bound lives in the type and costs nothing at
//! runtime.
//!
//! Most constants are written with the const-generic markers in this module:
//!
//! ```rust
//! use proven::constant::{Const, ConstChar, ConstI32, ConstUsize, Zero};
//!
//! assert_eq!(<ConstChar<'x'>>::value(), 'x');
//! assert_eq!(<ConstI32<-7>>::value(), -7);
//! assert_eq!(<ConstUsize<3>>::value(), 3);
//! assert_eq!(<Zero as Const<f64>>::value(), 0.0);
//! ```
//!
//! Custom constants implement the trait directly:
//!
//! ```rust
//! use proven::constant::Const;
//!
//! pub struct Greeting;
//!
//! impl Const<&'static str> for Greeting {
//!     fn value() -> &'static str {
//!         "hello"
//!     }
//! }
//!
//! assert_eq!(Greeting::value(), "hello");
//! ```

/// A fixed value of type `T` identified by a type.
///
/// `value()` must return the same value every time it is called.
pub trait Const<T>: Send + Sync + 'static {
    /// The constant's value.
    fn value() -> T;
}

/// A `char` constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstChar<const C: char>;

impl<const C: char> Const<char> for ConstChar<C> {
    #[inline]
    fn value() -> char {
        C
    }
}

/// A `bool` constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstBool<const B: bool>;

impl<const B: bool> Const<bool> for ConstBool<B> {
    #[inline]
    fn value() -> bool {
        B
    }
}

macro_rules! const_markers {
    ($($(#[$doc:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name<const N: $ty>;

            impl<const N: $ty> Const<$ty> for $name<N> {
                #[inline]
                fn value() -> $ty {
                    N
                }
            }
        )+
    };
}

const_markers!(
    /// An `i8` constant.
    ConstI8 => i8,
    /// An `i16` constant.
    ConstI16 => i16,
    /// An `i32` constant.
    ConstI32 => i32,
    /// An `i64` constant.
    ConstI64 => i64,
    /// An `i128` constant.
    ConstI128 => i128,
    /// An `isize` constant.
    ConstIsize => isize,
    /// A `u8` constant.
    ConstU8 => u8,
    /// A `u16` constant.
    ConstU16 => u16,
    /// A `u32` constant.
    ConstU32 => u32,
    /// A `u64` constant.
    ConstU64 => u64,
    /// A `u128` constant.
    ConstU128 => u128,
    /// A `usize` constant.
    ConstUsize => usize,
);

/// Zero of any primitive numeric type.
///
/// Used by the sign predicates ([`Positive`](crate::refined::Positive) and
/// friends), which need a zero for whatever type they are checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

macro_rules! impl_zero {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl Const<$ty> for Zero {
                #[inline]
                fn value() -> $ty {
                    $zero
                }
            }
        )+
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

// Named characters used by the built-in character classes

/// `'A'`
pub type ChA = ConstChar<'A'>;
/// `'Z'`
pub type ChZ = ConstChar<'Z'>;
/// `'a'`
pub type Cha = ConstChar<'a'>;
/// `'z'`
pub type Chz = ConstChar<'z'>;
/// `'0'`
pub type Ch0 = ConstChar<'0'>;
/// `'9'`
pub type Ch9 = ConstChar<'9'>;
/// `' '`
pub type ChSpace = ConstChar<' '>;
/// `'\t'`
pub type ChTab = ConstChar<'\t'>;
/// `'\r'`
pub type ChCr = ConstChar<'\r'>;
/// `'\n'`
pub type ChLf = ConstChar<'\n'>;
