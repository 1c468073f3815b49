use std::time::Instant;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::{Data, Response};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Installs the global tracing subscriber. Rocket's own `log` output is
/// bridged into it. A second call is a no-op.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("tracing subscriber not installed: {e}");
    }
}

/// Per-request bookkeeping kept in Rocket's request-local cache.
struct RequestTrace {
    id: String,
    started: Instant,
}

impl RequestTrace {
    fn begin(incoming: Option<&str>) -> Self {
        let id = incoming
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        Self { id, started: Instant::now() }
    }
}

/// Milliseconds since `started`, saturating at `u64::MAX`.
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn trace_of<'a>(req: &'a Request<'_>) -> &'a RequestTrace {
    req.local_cache(|| RequestTrace::begin(req.headers().get_one(REQUEST_ID_HEADER)))
}

/// The id of the current request, reusing the caller's `X-Request-Id` when
/// one was sent.
pub struct RequestId(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestId {
    type Error = std::convert::Infallible;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(RequestId(trace_of(req).id.clone()))
    }
}

/// Tags every response with `X-Request-Id` and logs one line per request.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _: &mut Data<'_>) {
        trace_of(req);
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let trace = trace_of(req);
        res.set_header(Header::new(REQUEST_ID_HEADER, trace.id.clone()));
        tracing::info!(
            request_id = %trace.id,
            method = %req.method(),
            path = %req.uri().path(),
            status = res.status().code,
            elapsed_ms = elapsed_ms(trace.started),
            "request completed"
        );
    }
}
