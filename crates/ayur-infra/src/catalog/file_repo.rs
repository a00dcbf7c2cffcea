//! File-backed catalog repository.
//!
//! Persists the whole catalog as one pretty-printed JSON array. Every write
//! replaces the file in full (temp file + rename). A missing or unparseable
//! file reseeds with the fixed default set; corruption is overwritten, not
//! merged.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use ayur_core::ids::IngredientId;
use ayur_core::ingredient::seed::seed_catalog;
use ayur_core::ingredient::{IngredientRecord, IngredientStatus};
use ayur_core::ports::CatalogRepository;

pub struct FileCatalogRepository {
    path: PathBuf,
}

impl FileCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create catalog dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write the content to a temp file next to the target, then rename it in.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp catalog failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp catalog to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    async fn save(&self, records: &[IngredientRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).context("serialize catalog failed")?;
        self.atomic_write(&content).await
    }

    /// Seed the catalog and persist it before returning, so an immediate
    /// reload finds the same data on disk.
    async fn reseed(&self) -> Result<Vec<IngredientRecord>> {
        let seed = seed_catalog();
        self.save(&seed).await?;
        Ok(seed)
    }

    async fn read_or_seed(&self) -> Result<Vec<IngredientRecord>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no catalog file, seeding defaults");
                return self.reseed().await;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read catalog failed: {}", self.path.display()))
            }
        };

        match serde_json::from_str::<Vec<IngredientRecord>>(&content) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "catalog file unparseable, overwriting with seed set"
                );
                self.reseed().await
            }
        }
    }
}

#[async_trait]
impl CatalogRepository for FileCatalogRepository {
    async fn load(&self) -> Result<Vec<IngredientRecord>> {
        self.read_or_seed().await
    }

    async fn append(&self, record: &IngredientRecord) -> Result<()> {
        let mut records = self.read_or_seed().await?;
        records.push(record.clone());
        self.save(&records).await
    }

    async fn remove(&self, id: IngredientId) -> Result<()> {
        let mut records = self.read_or_seed().await?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            debug!(%id, "remove: id not in catalog, nothing to do");
            return Ok(());
        }
        self.save(&records).await
    }

    async fn set_status(&self, id: IngredientId, status: IngredientStatus) -> Result<()> {
        let mut records = self.read_or_seed().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            debug!(%id, "set_status: id not in catalog, nothing to do");
            return Ok(());
        };
        record.status = status;
        self.save(&records).await
    }
}
