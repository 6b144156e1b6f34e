use crate::{font::FontSpec, units::Px, MeasurementError};
use std::{cell::RefCell, collections::HashMap};

/// The rendered size of a piece of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Extent {
        Extent {
            width: Px(width),
            height: Px(height),
        }
    }
}

/// The measurement oracle that pagination is driven by.
///
/// Given some text, reports how large it would be if drawn left-aligned, wrapping
/// automatically at `width`, with the given font. Implementations must be
/// deterministic: measuring the same inputs twice must give the same answer.
///
/// Any `Fn(&str, Px, &FontSpec) -> Result<Extent, MeasurementError>` closure is a
/// measurer, which is handy for tests and for plugging in other text engines.
pub trait Measurer {
    fn measure(&self, text: &str, width: Px, font: &FontSpec) -> Result<Extent, MeasurementError>;
}

impl<F> Measurer for F
where
    F: Fn(&str, Px, &FontSpec) -> Result<Extent, MeasurementError>,
{
    fn measure(&self, text: &str, width: Px, font: &FontSpec) -> Result<Extent, MeasurementError> {
        self(text, width, font)
    }
}

/// Pins a closure to the [Measurer] signature so its argument types can be
/// inferred
pub fn measurer_fn<F>(f: F) -> F
where
    F: Fn(&str, Px, &FontSpec) -> Result<Extent, MeasurementError>,
{
    f
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    width: Px,
    family: String,
    // f32 isn't Hash, its bit pattern is
    size_bits: u32,
}

/// Memoises another [Measurer]. Shaping text is the expensive part of
/// pagination and the paginator re-measures ever-growing prefixes, so repeated
/// series over the same text benefit from keeping results around.
///
/// Only successful measurements are cached.
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<HashMap<CacheKey, Extent>>,
}

impl<M: Measurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> CachedMeasurer<M> {
        CachedMeasurer {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of cached measurements
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// The wrapped measurer
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Drop the cache and return the wrapped measurer
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Measurer> Measurer for CachedMeasurer<M> {
    fn measure(&self, text: &str, width: Px, font: &FontSpec) -> Result<Extent, MeasurementError> {
        let key = CacheKey {
            text: text.to_string(),
            width,
            family: font.family.clone(),
            size_bits: font.size.0.to_bits(),
        };

        if let Some(extent) = self.cache.borrow().get(&key) {
            return Ok(*extent);
        }

        let extent = self.inner.measure(text, width, font)?;
        self.cache.borrow_mut().insert(key, extent);
        Ok(extent)
    }
}
