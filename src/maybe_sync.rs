//! Element and closure bounds for the map routines.
//!
//! The threaded path hands raw buffer pointers and a shared `&F` to rayon
//! workers, so with `parallel` the element type must be [`Send`] + [`Sync`]
//! ([`MaybeSendSync`]) and the closure [`Sync`] ([`MaybeSync`]). Without
//! `parallel` every call runs on the caller's thread and both bounds hold
//! for every type.

#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync> MaybeSync for T {}

#[cfg(feature = "parallel")]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> MaybeSendSync for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeSync for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSendSync {}
#[cfg(not(feature = "parallel"))]
impl<T> MaybeSendSync for T {}
