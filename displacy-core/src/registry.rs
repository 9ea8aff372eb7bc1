//! # Registro de Modelos
//!
//! Carrega modelos sob demanda pelo nome e os mantém em cache durante toda a vida
//! do processo. Não há expiração nem limite de tamanho.
//!
//! O carregamento acontece **fora** do lock: duas requisições simultâneas pelo
//! mesmo modelo ainda não carregado podem carregá-lo duas vezes, e a primeira
//! instância inserida no cache é a que todos passam a usar.
//!
//! ## Resolução de nomes ([`ModelStore`])
//!
//! | Nome                                   | Origem                          |
//! |----------------------------------------|---------------------------------|
//! | `en`, `en_core_web_{sm,md,lg}`         | modelo embutido                 |
//! | qualquer outro                         | `<models_dir>/<nome>.json`      |

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rayon::prelude::*;

use crate::error::LoadError;
use crate::language::{Language, ModelMeta};
use crate::model::{LexiconModel, ModelSpec, BUILTIN_MODEL};

/// Nomes resolvidos para o modelo embutido.
pub const BUILTIN_ALIASES: &[&str] = &[BUILTIN_MODEL, "en_core_web_sm", "en_core_web_md", "en_core_web_lg"];

/// Fonte de modelos: resolve um nome em um modelo pronto.
pub trait ModelLoader: Send + Sync {
    fn load(&self, name: &str) -> Result<Arc<dyn Language>, LoadError>;
}

/// Carregador padrão: modelo embutido + especificações JSON em um diretório.
#[derive(Debug, Clone)]
pub struct ModelStore {
    models_dir: PathBuf,
}

impl ModelStore {
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    fn read_spec(&self, name: &str) -> Result<ModelSpec, LoadError> {
        let path = self.models_dir.join(format!("{}.json", name));
        let content = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(name.to_string()),
            _ => LoadError::Io {
                name: name.to_string(),
                source,
            },
        })?;
        serde_json::from_str(&content).map_err(|source| LoadError::Format {
            name: name.to_string(),
            source,
        })
    }
}

impl ModelLoader for ModelStore {
    fn load(&self, name: &str) -> Result<Arc<dyn Language>, LoadError> {
        if BUILTIN_ALIASES.contains(&name) {
            return Ok(Arc::new(LexiconModel::english().with_name(name)));
        }
        validate_name(name)?;

        let mut spec = self.read_spec(name)?;
        if spec.name.is_empty() {
            spec.name = name.to_string();
        }
        Ok(Arc::new(LexiconModel::from_spec(spec)?))
    }
}

/// Nomes viram caminhos de arquivo: nada de separadores, `..` ou nomes ocultos.
fn validate_name(name: &str) -> Result<(), LoadError> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(|c: char| c == '/' || c == '\\')
        || name.contains("..")
        || name.chars().any(|c| c.is_control() || c.is_whitespace());
    if invalid {
        Err(LoadError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Cache de modelos carregados, compartilhado entre requisições.
pub struct ModelRegistry {
    loader: Box<dyn ModelLoader>,
    cache: RwLock<HashMap<String, Arc<dyn Language>>>,
}

impl ModelRegistry {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registro com o [`ModelStore`] padrão sobre `models_dir`.
    pub fn with_models_dir(models_dir: impl Into<PathBuf>) -> Self {
        Self::new(ModelStore::new(models_dir))
    }

    /// Modelo em cache ou recém-carregado.
    pub fn get_model(&self, name: &str) -> Result<Arc<dyn Language>, LoadError> {
        if let Some(model) = self.read().get(name) {
            return Ok(Arc::clone(model));
        }

        let model = self.loader.load(name)?;
        let mut cache = self.write();
        Ok(Arc::clone(cache.entry(name.to_string()).or_insert(model)))
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Nomes em cache, em ordem alfabética.
    pub fn loaded(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Metadados dos modelos em cache, na ordem de [`loaded`](Self::loaded).
    pub fn loaded_meta(&self) -> Vec<ModelMeta> {
        let mut metas: Vec<ModelMeta> = self.read().values().map(|model| model.meta()).collect();
        metas.sort_by(|a, b| a.name.cmp(&b.name));
        metas
    }

    /// Carrega vários modelos em paralelo, retornando o resultado de cada um.
    pub fn preload(&self, names: &[String]) -> Vec<(String, Result<(), LoadError>)> {
        names
            .par_iter()
            .map(|name| (name.clone(), self.get_model(name).map(|_| ())))
            .collect()
    }

    // Um lock envenenado só indica pânico em outra thread; o mapa continua íntegro.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn Language>>> {
        self.cache.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn Language>>> {
        self.cache.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded", &self.loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Conta chamadas e só conhece o modelo embutido.
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
    }

    impl ModelLoader for CountingLoader {
        fn load(&self, name: &str) -> Result<Arc<dyn Language>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if name == "en" {
                Ok(Arc::new(LexiconModel::english()))
            } else {
                Err(LoadError::NotFound(name.to_string()))
            }
        }
    }

    fn counting_registry() -> (ModelRegistry, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = ModelRegistry::new(CountingLoader {
            calls: Arc::clone(&calls),
        });
        (registry, calls)
    }

    #[test]
    fn test_second_request_hits_cache() {
        let (registry, calls) = counting_registry();
        let first = registry.get_model("en").unwrap();
        let second = registry.get_model("en").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_loaded("en"));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let (registry, calls) = counting_registry();
        assert!(registry.get_model("xx").is_err());
        assert!(registry.get_model("xx").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(registry.loaded().is_empty());
    }

    #[test]
    fn test_concurrent_loads_share_one_instance() {
        let (registry, _) = counting_registry();
        let models: Vec<Arc<dyn Language>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get_model("en").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let cached = registry.get_model("en").unwrap();
        assert!(models.iter().all(|m| Arc::ptr_eq(m, &cached)));
        assert_eq!(registry.loaded(), vec!["en".to_string()]);
    }

    #[test]
    fn test_builtin_aliases() {
        let registry = ModelRegistry::with_models_dir("/nonexistent");
        for alias in BUILTIN_ALIASES {
            let model = registry.get_model(alias).unwrap();
            assert_eq!(model.name(), *alias);
        }
        assert_eq!(registry.loaded().len(), BUILTIN_ALIASES.len());
    }

    #[test]
    fn test_loads_spec_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en_custom.json"),
            r#"{"entities": {"Gotham": "GPE"}}"#,
        )
        .unwrap();

        let registry = ModelRegistry::with_models_dir(dir.path());
        let model = registry.get_model("en_custom").unwrap();
        assert_eq!(model.name(), "en_custom");
        let doc = model.annotate("Gotham sleeps").unwrap();
        assert_eq!(doc.ents()[0].label, "GPE");

        registry.get_model("en").unwrap();
        let metas = registry.loaded_meta();
        let names: Vec<&str> = metas.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["en", "en_custom"]);
        assert_eq!(metas[1].lang, "en");
        assert_eq!(metas[1].version, crate::language::ENGINE_VERSION);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        std::fs::create_dir(dir.path().join("folder.json")).unwrap();
        std::fs::write(dir.path().join("badtag.json"), r#"{"lexicon": {"x": "ZZ"}}"#).unwrap();
        let store = ModelStore::new(dir.path());

        assert!(matches!(store.load("missing"), Err(LoadError::NotFound(_))));
        assert!(matches!(store.load("broken"), Err(LoadError::Format { .. })));
        assert!(matches!(store.load("folder"), Err(LoadError::Io { .. })));
        assert!(matches!(store.load("badtag"), Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let store = ModelStore::new("models");
        for name in ["", "../etc/passwd", "a/b", "a\\b", ".hidden", "two words"] {
            let err = store.load(name).err().unwrap();
            assert!(matches!(err, LoadError::InvalidName(_)), "{:?}", name);
            assert!(err.is_unknown_model());
        }
    }

    #[test]
    fn test_preload_reports_each_name() {
        let (registry, _) = counting_registry();
        let names = vec!["en".to_string(), "xx".to_string()];
        let mut results = registry.preload(&names);
        results.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(results[0].0, "en");
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, "xx");
        assert!(matches!(results[1].1, Err(LoadError::NotFound(_))));
        assert_eq!(registry.loaded(), vec!["en".to_string()]);
    }
}
