//! The load-and-cache orchestrator.

use std::collections::HashSet;
use std::path::Path;

use weft_cache::{ArtifactStore, WriteError};
use weft_source::SourceProvider;

use crate::activate::Activate;
use crate::compile::Compile;
use crate::config::CacheDir;
use crate::error::LoadError;
use crate::identity::{cache_path_for, unit_id_for, UnitId};

/// Ties the source provider, compiler, activator, and artifact store
/// together and decides, per load, whether to reuse, recompile, or bypass
/// the cache.
///
/// The loader owns the active-unit registry: the set of unit ids already
/// activated through it. The registry grows for the loader's lifetime and
/// is never cleared; embedders wanting process-wide reuse share one
/// loader. All collaborator calls are blocking and run to completion
/// before `load` returns.
pub struct Loader<P, C, A> {
    /// Resolves template names to source text and modification times.
    provider: P,

    /// Turns source text into compiled artifact bytes.
    compiler: C,

    /// Makes compiled artifacts callable in this process.
    activator: A,

    /// The artifact store, or `None` when the cache is disabled.
    store: Option<ArtifactStore>,

    /// Whether existing artifacts are checked against the source
    /// modification time before reuse.
    auto_reload: bool,

    /// Unit ids already activated through this loader.
    active: HashSet<UnitId>,
}

impl<P, C, A> Loader<P, C, A>
where
    P: SourceProvider,
    C: Compile,
    A: Activate,
{
    /// Creates a loader with the default cache directory and
    /// `auto_reload` enabled.
    pub fn new(provider: P, compiler: C, activator: A) -> Result<Self, LoadError> {
        Self::with_cache(provider, compiler, activator, CacheDir::Default, true)
    }

    /// Creates a loader with an explicit cache configuration.
    ///
    /// A concrete cache root is created eagerly here; no load ever has to
    /// deal with a missing cache directory.
    pub fn with_cache(
        provider: P,
        compiler: C,
        activator: A,
        cache: CacheDir,
        auto_reload: bool,
    ) -> Result<Self, LoadError> {
        let store = match cache.resolve() {
            None => None,
            Some(root) => {
                std::fs::create_dir_all(&root).map_err(|e| LoadError::Init {
                    path: root.clone(),
                    source: e,
                })?;
                Some(ArtifactStore::new(&root))
            }
        };
        Ok(Self {
            provider,
            compiler,
            activator,
            store,
            auto_reload,
            active: HashSet::new(),
        })
    }

    /// Loads a template by name, returning its compiled-unit identifier
    /// with the unit activated as a side effect.
    ///
    /// Decision procedure:
    ///
    /// 1. If the unit is already active, return immediately — no source
    ///    fetch, no disk access. A unit is therefore permanently fresh
    ///    once activated, even if its source later changes while
    ///    `auto_reload` is on; staleness is only ever checked before the
    ///    first activation. Within one loader lifetime a template is
    ///    recompiled at most once.
    /// 2. With the cache disabled, compile from source and activate
    ///    directly.
    /// 3. With no artifact on disk, compile and persist — unless the
    ///    source has no modification time, in which case it is compiled
    ///    and activated without ever touching the cache.
    /// 4. With an artifact on disk and `auto_reload` off, reuse it
    ///    without consulting the provider. With `auto_reload` on,
    ///    recompile and overwrite only when the artifact's write time is
    ///    strictly older than the source's modification time.
    /// 5. Activate the artifact and record the unit as active.
    ///
    /// If the artifact store cannot open its target for writing, the
    /// freshly compiled bytes are activated directly instead and the
    /// caller sees success; only this template's future loads pay for it.
    /// Every error that does surface leaves the registry untouched.
    pub fn load(&mut self, name: &str) -> Result<UnitId, LoadError> {
        let id = unit_id_for(name);
        if self.active.contains(&id) {
            return Ok(id);
        }

        let Some(store) = &self.store else {
            let record = self.provider.get_source(name)?;
            let artifact = self.compiler.compile(&record.text, name)?;
            return self.activate_in_memory(id, &artifact);
        };

        let path = cache_path_for(store.root(), name);
        if !store.exists(&path) {
            let record = self.provider.get_source(name)?;
            if record.modified_at.is_none() {
                let artifact = self.compiler.compile(&record.text, name)?;
                return self.activate_in_memory(id, &artifact);
            }
            let artifact = self.compiler.compile(&record.text, name)?;
            match store.write(&path, &artifact) {
                Ok(()) => {}
                Err(WriteError::CannotOpen { .. }) => {
                    return self.activate_in_memory(id, &artifact)
                }
                Err(e) => return Err(LoadError::Write(e)),
            }
        } else if self.auto_reload {
            let record = self.provider.get_source(name)?;
            // An absent modification time never marks an existing
            // artifact stale.
            if let Some(modified_at) = record.modified_at {
                if store.last_write_time(&path)? < modified_at {
                    let artifact = self.compiler.compile(&record.text, name)?;
                    match store.write(&path, &artifact) {
                        Ok(()) => {}
                        Err(WriteError::CannotOpen { .. }) => {
                            return self.activate_in_memory(id, &artifact)
                        }
                        Err(e) => return Err(LoadError::Write(e)),
                    }
                }
            }
        }

        let artifact = store.read(&path)?;
        self.activator.activate(&id, &artifact)?;
        self.active.insert(id.clone());
        Ok(id)
    }

    /// Activates compiled bytes without involving the artifact store.
    ///
    /// This is both the direct path (cache disabled, uncacheable source)
    /// and the recovery path for an unwritable cache target.
    fn activate_in_memory(&mut self, id: UnitId, artifact: &[u8]) -> Result<UnitId, LoadError> {
        self.activator.activate(&id, artifact)?;
        self.active.insert(id.clone());
        Ok(id)
    }

    /// Returns whether the named template has been activated through this
    /// loader.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(&unit_id_for(name))
    }

    /// Returns the resolved cache root, or `None` when the cache is
    /// disabled.
    pub fn cache_root(&self) -> Option<&Path> {
        self.store.as_ref().map(ArtifactStore::root)
    }

    /// Returns whether staleness checks are enabled for existing
    /// artifacts.
    pub fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    /// Returns the activator, through which activated units are reached.
    pub fn activator(&self) -> &A {
        &self.activator
    }

    /// Returns the activator mutably.
    pub fn activator_mut(&mut self) -> &mut A {
        &mut self.activator
    }
}
