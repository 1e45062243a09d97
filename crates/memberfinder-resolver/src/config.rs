//! Resolver configuration.

use crate::conversion::ConversionRules;

/// Settings fixed for the lifetime of a [`Resolver`](crate::Resolver).
///
/// Catalogues are cached per target, so options that shape a catalogue
/// cannot change once the resolver exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Which argument conversions are allowed.
    pub conversion: ConversionRules,
    /// Replace public methods declared on non-public types with the
    /// declaration from a public supertype, dropping those without one.
    /// When off, every public method is catalogued as declared.
    pub redirect_inaccessible: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            conversion: ConversionRules::default(),
            redirect_inaccessible: true,
        }
    }
}

impl ResolverConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable primitive widening.
    pub fn with_primitive_widening(mut self, enabled: bool) -> Self {
        self.conversion.primitive_widening = enabled;
        self
    }

    /// Enable or disable accessible-declaration redirection.
    pub fn with_redirect_inaccessible(mut self, enabled: bool) -> Self {
        self.redirect_inaccessible = enabled;
        self
    }
}
