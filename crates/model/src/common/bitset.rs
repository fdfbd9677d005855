//! Typed bit-sets over closed enumerations.
//!
//! `TypeSet` and `AttributeSet` are both instances of [`BitSet`]. Keeping the
//! element type in the signature means a set of operand types can never be
//! mixed up with a set of modifier capabilities, while the storage stays a
//! single `u16` so that whole tables of sets can live in `static` data.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Sub};

/// A member of a closed enumeration that can be stored in a [`BitSet`].
pub trait BitIndex: Copy + Eq + 'static {
    /// Every member of the enumeration, in ascending bit order.
    const MEMBERS: &'static [Self];

    /// Bit position of this member. Must be unique and below 16.
    fn bit(self) -> u32;
}

/// A set of `T` stored as one bit per member.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<T: BitIndex> {
    bits: u16,
    _members: PhantomData<T>,
}

impl<T: BitIndex> BitSet<T> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// Builds a set from its raw bit representation.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits,
            _members: PhantomData,
        }
    }

    /// Raw bit representation.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Returns `true` when no member is present.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Set union.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Set intersection.
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Members of `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns `true` if every member of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// The set holding every member of `T`.
    pub fn full() -> Self {
        T::MEMBERS.iter().copied().collect()
    }

    /// The set holding only `member`.
    #[inline]
    pub fn single(member: T) -> Self {
        Self::from_bits(1 << member.bit())
    }

    /// Membership test.
    #[inline]
    pub fn contains(self, member: T) -> bool {
        self.bits & (1 << member.bit()) != 0
    }

    /// Adds `member` to the set.
    #[inline]
    pub fn insert(&mut self, member: T) {
        self.bits |= 1 << member.bit();
    }

    /// Removes `member` from the set.
    #[inline]
    pub fn remove(&mut self, member: T) {
        self.bits &= !(1 << member.bit());
    }

    /// Number of members present.
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates the members present, in bit order.
    pub fn iter(self) -> impl Iterator<Item = T> {
        T::MEMBERS.iter().copied().filter(move |m| self.contains(*m))
    }
}

impl<T: BitIndex> Default for BitSet<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: BitIndex> FromIterator<T> for BitSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl<T: BitIndex> From<T> for BitSet<T> {
    fn from(member: T) -> Self {
        Self::single(member)
    }
}

impl<T: BitIndex> BitOr for BitSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<T: BitIndex> BitAnd for BitSet<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<T: BitIndex> Sub for BitSet<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl<T: BitIndex + fmt::Debug> fmt::Debug for BitSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders members joined by `|`, or `-` for the empty set.
impl<T: BitIndex + fmt::Display> fmt::Display for BitSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}
