use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use itrack_core::Tracker;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

/// Accept loop: one tokio task per connection, requests handed to the
/// issue routes. Runs until the process is stopped.
pub async fn serve(addr: SocketAddr, tracker: Arc<Tracker>) -> eyre::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    loop {
        let (stream, remote_addr) = listener.accept().await?;
        let tracker = tracker.clone();

        tokio::task::spawn(async move {
            if let Err(err) = handle_connection(stream, tracker).await {
                error!("connection from {remote_addr} failed: {err}");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, tracker: Arc<Tracker>) -> eyre::Result<()> {
    let io = TokioIo::new(stream);
    let service = TrackerService { tracker };

    http1::Builder::new().serve_connection(io, service).await?;

    Ok(())
}

struct TrackerService {
    tracker: Arc<Tracker>,
}

impl Service<hyper::Request<Incoming>> for TrackerService {
    type Response = hyper::Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
        let tracker = self.tracker.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes();

            Ok(crate::routes::dispatch(&tracker, &parts, &body).await)
        })
    }
}
