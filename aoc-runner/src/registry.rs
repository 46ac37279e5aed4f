//! Solver registry: plugin collection, registration, and lookup

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::HashMap;

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Plugin information for automatic solver registration.
///
/// Solution crates submit one of these per solver via `inventory::submit!`;
/// the builder collects them at registration time.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2024,
///         day: 3,
///         solver: &Day3Solver,
///         tags: &["2024"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g. "2024", "grid", "wip")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Builder for constructing a [`SolverRegistry`].
///
/// Detects duplicate year-day registrations and yields an immutable registry
/// once built.
pub struct RegistryBuilder {
    entries: HashMap<(u16, u8), RegistryEntry>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.keys())
            .finish()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a solver factory for a specific year and day.
    ///
    /// Returns an error if a solver is already registered for the given
    /// year-day combination.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate.
    ///
    /// Only registers plugins for which `filter` returns `true`, allowing
    /// selective registration based on tags, year, or day.
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry.
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers.
pub struct SolverRegistry {
    entries: HashMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day by parsing `input`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered solvers, ordered by year then day.
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter().map(|(year, day)| SolverInfo {
            year,
            day,
            parts: self.entries[&(year, day)].parts,
        })
    }

    /// Get metadata for a specific solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entries.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder.
///
/// Type-erased counterpart of [`Solver`](crate::Solver): it has no associated
/// types, so different solver types can sit behind `&'static dyn
/// RegisterableSolver` references in [`SolverPlugin`] entries. Every `Solver`
/// gets an implementation through the blanket impl below.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day.
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }
}
