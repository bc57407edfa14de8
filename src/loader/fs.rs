// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bundles from a directory tree.
//!
//! Layout: `<root>/<version>/<stem>.json`, or `<stem>.json.br` when the site
//! ships brotli-compressed artifacts. The plain file wins when both exist.
//!
//! Reading, decompressing and parsing all block, so the async [`BundleLoader`]
//! path runs them on a dedicated thread and the polling executor only waits on
//! a channel.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use futures::channel::oneshot;
use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use super::{BundleKey, BundleLoader};
use crate::error::LoadError;
use crate::index::IndexBundle;

#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsLoader { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the uncompressed artifact for `key`.
    pub fn bundle_path(&self, key: &BundleKey) -> PathBuf {
        self.root
            .join(&key.version)
            .join(format!("{}.json", key.file_stem()))
    }

    /// Read and decode on the calling thread.
    pub fn load_blocking(&self, key: &BundleKey) -> Result<IndexBundle, LoadError> {
        let path = self.bundle_path(key);
        match std::fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "loading bundle");
                IndexBundle::from_json_slice(&bytes)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => self.load_compressed(&path),
            Err(err) => Err(LoadError::io(&path, &err)),
        }
    }

    fn load_compressed(&self, json_path: &Path) -> Result<IndexBundle, LoadError> {
        let mut name = json_path.as_os_str().to_owned();
        name.push(".br");
        let path = PathBuf::from(name);

        let compressed = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(json_path.to_path_buf()))
            }
            Err(err) => return Err(LoadError::io(&path, &err)),
        };

        let mut bytes = Vec::new();
        brotli::Decompressor::new(compressed.as_slice(), 4096)
            .read_to_end(&mut bytes)
            .map_err(|err| LoadError::Decompress {
                path: path.clone(),
                message: err.to_string(),
            })?;
        debug!(
            path = %path.display(),
            compressed = compressed.len(),
            bytes = bytes.len(),
            "loading compressed bundle"
        );
        IndexBundle::from_json_slice(&bytes)
    }
}

impl BundleLoader for FsLoader {
    fn load(&self, key: &BundleKey) -> BoxFuture<'static, Result<IndexBundle, LoadError>> {
        let loader = self.clone();
        let key = key.clone();
        async move {
            let (tx, rx) = oneshot::channel();
            let spawned = std::thread::Builder::new()
                .name("docsift-load".to_string())
                .spawn(move || {
                    // The receiver is gone only if the load was abandoned.
                    let _ = tx.send(loader.load_blocking(&key));
                });
            if let Err(err) = spawned {
                return Err(LoadError::Transport(format!("cannot spawn loader thread: {}", err)));
            }
            rx.await.unwrap_or_else(|_| {
                Err(LoadError::Transport("loader thread exited without a result".to_string()))
            })
        }
        .boxed()
    }
}
