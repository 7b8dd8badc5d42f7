//! Entry point for external callers.
//!
//! Callers attach, submit work, and detach. Each submission resolves a
//! connector from the registry, registers a job with the lifecycle manager on
//! the caller's thread, and runs the connector call as a Tokio task on the
//! dispatcher runtime. The job is unregistered when the task finishes, fails,
//! or panics.
//!
//! The facade never looks inside the parameter list; parsing belongs to the
//! job runner.

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;
use websms_domain::{ConnectorKind, DispatchError};

use super::job::{ConnectorJob, JobCollaborators};
use super::registry::ConnectorRegistry;
use crate::lifecycle::JobLifecycleManager;

pub struct DispatchFacade {
    lifecycle: Arc<JobLifecycleManager>,
    registry: ConnectorRegistry,
    collaborators: JobCollaborators,
    runtime: Handle,
}

impl DispatchFacade {
    /// Create a facade that spawns jobs on `runtime`.
    pub fn new(
        lifecycle: Arc<JobLifecycleManager>,
        registry: ConnectorRegistry,
        collaborators: JobCollaborators,
        runtime: Handle,
    ) -> Self {
        Self { lifecycle, registry, collaborators, runtime }
    }

    pub fn lifecycle(&self) -> &Arc<JobLifecycleManager> {
        &self.lifecycle
    }

    pub fn attach(&self) {
        self.lifecycle.attach();
    }

    pub fn detach(&self) {
        self.lifecycle.detach();
    }

    /// Send a message through `kind`.
    ///
    /// `params` is forwarded untouched to the job: recipient list first,
    /// body second. The returned handle resolves to `true` when the connector
    /// reported success; callers that only fire and forget may drop it.
    pub fn send_message(
        &self,
        kind: ConnectorKind,
        params: Vec<String>,
    ) -> Result<JoinHandle<bool>, DispatchError> {
        let job = self.job_for(kind)?;
        debug!(connector = %kind, params = params.len(), "dispatching send_message");
        Ok(self.spawn_job(async move { job.send(&params).await }))
    }

    /// IPC-shaped variant of [`send_message`](Self::send_message) keyed by the
    /// numeric connector id.
    pub fn send_message_by_id(
        &self,
        connector_id: u16,
        params: Vec<String>,
    ) -> Result<JoinHandle<bool>, DispatchError> {
        let kind = ConnectorKind::try_from(connector_id)?;
        self.send_message(kind, params)
    }

    /// Refresh the account balance of `kind` in the background.
    pub fn update_balance(&self, kind: ConnectorKind) -> Result<JoinHandle<bool>, DispatchError> {
        let job = self.job_for(kind)?;
        debug!(connector = %kind, "dispatching update_balance");
        Ok(self.spawn_job(async move { job.update_balance().await }))
    }

    fn job_for(&self, kind: ConnectorKind) -> Result<ConnectorJob, DispatchError> {
        let connector = self.registry.get(kind)?;
        Ok(ConnectorJob::new(connector, self.collaborators.clone()))
    }

    fn spawn_job<F>(&self, work: F) -> JoinHandle<bool>
    where
        F: Future<Output = bool> + Send + 'static,
    {
        let guard = self.lifecycle.start_job();
        self.runtime.spawn(async move {
            let _guard = guard;
            work.await
        })
    }
}
