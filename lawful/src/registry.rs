//! Append-only dispatch from `(capability, container tag)` pairs to erased
//! adapters.
//!
//! The registry is the runtime stand-in for compile-time capability lookup:
//! a shape either has an adapter available at resolution time or resolution
//! fails, explicitly and recoverably. There is no unregistration; entries
//! live for the process lifetime. Adapters are fully constructed before they
//! are inserted, so a resolved shared reference never observes partial
//! construction even under concurrent use.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::adapter::{Adapter, Payload};
use crate::capability::{CapabilityKind, ContainerTag};
use crate::laws::{check_laws, CheckConfig, LawReport, MalformedAdapter, SampleSet};

/// Recoverable registry failures, surfaced as values at the call site.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An adapter is already registered for this pair; the existing entry is
    /// left intact.
    #[error("an adapter is already registered for {kind}/{tag}")]
    DuplicateRegistration {
        kind: CapabilityKind,
        tag: ContainerTag,
    },
    /// No adapter is registered for this pair.
    #[error("no adapter registered for {kind}/{tag}")]
    UnknownCapability {
        kind: CapabilityKind,
        tag: ContainerTag,
    },
    #[error(transparent)]
    Malformed(#[from] MalformedAdapter),
    /// Law checking ahead of registration found failures, so the adapter was
    /// refused.
    #[error("adapter for {kind}/{tag} failed {failed} law check(s)")]
    LawsFailed {
        kind: CapabilityKind,
        tag: ContainerTag,
        failed: usize,
    },
}

/// Maps `(CapabilityKind, ContainerTag)` to the adapter implementing that
/// capability for that shape. Append-only for the process lifetime.
///
/// ```rust
/// use lawful::{Adapter, CapabilityKind, ContainerTag, PartiallyApplied, Registry};
///
/// let registry = Registry::new();
/// let tag = ContainerTag("option");
/// registry
///     .register(CapabilityKind::Functor, tag, Adapter::functor::<Option<PartiallyApplied>>())
///     .unwrap();
///
/// let adapter = registry.resolve(CapabilityKind::Functor, tag).unwrap();
/// assert_eq!(adapter.kind(), CapabilityKind::Functor);
/// ```
#[derive(Default)]
pub struct Registry {
    entries: RwLock<BTreeMap<(CapabilityKind, ContainerTag), Arc<Adapter>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an adapter under `(kind, tag)`.
    ///
    /// Fails with [`RegistryError::DuplicateRegistration`] when the pair is
    /// taken (no state change), and with a [`MalformedAdapter`] error when
    /// the adapter's operations disagree with the declared kind.
    pub fn register(
        &self,
        kind: CapabilityKind,
        tag: ContainerTag,
        adapter: Adapter,
    ) -> Result<(), RegistryError> {
        if adapter.kind() != kind {
            return Err(MalformedAdapter {
                expected: kind,
                provided: adapter.kind(),
            }
            .into());
        }
        let mut entries = self.entries.write().expect("registry lock poisoned");
        match entries.entry((kind, tag)) {
            std::collections::btree_map::Entry::Occupied(_) => {
                Err(RegistryError::DuplicateRegistration { kind, tag })
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(Arc::new(adapter));
                Ok(())
            }
        }
    }

    /// Law-check an adapter against `samples` and publish it only if no law
    /// failed. Returns the report so callers can still inspect vacuous laws.
    pub fn register_checked(
        &self,
        kind: CapabilityKind,
        tag: ContainerTag,
        adapter: Adapter,
        samples: &SampleSet,
        eq: impl Fn(&Payload, &Payload) -> bool,
        config: CheckConfig,
    ) -> Result<LawReport, RegistryError> {
        let report = check_laws(kind, &adapter, samples, eq, config)?;
        let failed = report.failures().count();
        if failed > 0 {
            return Err(RegistryError::LawsFailed { kind, tag, failed });
        }
        self.register(kind, tag, adapter)?;
        Ok(report)
    }

    /// Look up the adapter for `(kind, tag)`, returning a shared reference.
    pub fn resolve(
        &self,
        kind: CapabilityKind,
        tag: ContainerTag,
    ) -> Result<Arc<Adapter>, RegistryError> {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries
            .get(&(kind, tag))
            .cloned()
            .ok_or(RegistryError::UnknownCapability { kind, tag })
    }

    /// The set of capability kinds registered for a tag - "what can this
    /// container do".
    pub fn resolve_all(&self, tag: ContainerTag) -> BTreeSet<CapabilityKind> {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries
            .keys()
            .filter(|(_, t)| *t == tag)
            .map(|(kind, _)| *kind)
            .collect()
    }
}
