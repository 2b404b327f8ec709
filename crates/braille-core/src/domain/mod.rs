//! Domain entities for Braille transcoding.
//!
//! This module contains the translation entity and its vocabulary types.  It
//! has no I/O: the entity receives a plain string and a direction, and hands
//! back a string or a [`translation::TranslationError`].
//!
//! # Why an entity instead of a bare function? (for beginners)
//!
//! A caller such as the bridge needs more than the output string: it reports
//! the original text, the direction, and whether the attempt succeeded.
//! [`translation::Translation`] carries all of that, and its status makes the
//! "run exactly once" rule explicit instead of leaving it to convention.

/// Translation entity, direction, status and error taxonomy.
///
/// See [`translation::Translation`] for the main type.
pub mod translation;
