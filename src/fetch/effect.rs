//! The fetch-on-mount effect.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::fetch::client::PostsClient;
use crate::fetch::error::FetchError;
use crate::posts::Post;
use crate::scope::ScopeHandle;

pub type FetchOutcome = Result<Vec<Post>, FetchError>;

/// Run one fetch on `runtime` and hand the outcome to `deliver`.
///
/// `deliver` is only called while `scope` is open. If the scope closes while
/// the request is in flight the request is abandoned.
pub fn spawn_fetch<F>(
    runtime: &Handle,
    client: PostsClient,
    scope: ScopeHandle,
    deliver: F,
) -> JoinHandle<()>
where
    F: FnOnce(FetchOutcome) + Send + 'static,
{
    runtime.spawn(async move {
        let outcome = tokio::select! {
            _ = scope.closed() => {
                debug!(url = %client.url(), "view closed before fetch completed");
                return;
            }
            outcome = client.fetch_posts() => outcome,
        };

        if scope.is_closed() {
            debug!("dropping fetch result for closed view");
            return;
        }
        if let Err(err) = &outcome {
            error!(error = %err, "fetch failed");
        }
        deliver(outcome);
    })
}
