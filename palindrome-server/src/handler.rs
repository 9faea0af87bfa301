//! Request handler for palindrome-server

use palindrome_core::{make_palindrome_from, try_execute, try_is_palindrome_candidate};
use palindrome_core::{Request, Response};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct Handler;

impl Handler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, request: &Request) -> Response {
        match request {
            Request::Check { input } => self.handle_check(input),
            Request::Execute { input } => self.handle_execute(input),
            Request::Arrange { input } => self.handle_arrange(input),
            Request::Shutdown => {
                info!("Shutdown requested");
                Response::success()
            }
        }
    }

    fn handle_check(&self, input: &str) -> Response {
        debug!("Check request: input={:?}", input);

        match try_is_palindrome_candidate(input) {
            Ok(candidate) => Response::Check { candidate },
            Err(e) => {
                warn!("Candidate check failed: {}", e);
                Response::error(e.to_string())
            }
        }
    }

    fn handle_execute(&self, input: &str) -> Response {
        debug!("Execute request: input={:?}", input);

        match try_execute(input) {
            Ok(outcome) => Response::message(outcome.message()),
            Err(e) => {
                warn!("Workflow failed: {}", e);
                Response::error(e.to_string())
            }
        }
    }

    fn handle_arrange(&self, input: &str) -> Response {
        debug!("Arrange request: input={:?}", input);

        match make_palindrome_from(input) {
            Ok(palindrome) => Response::Arrange { palindrome },
            Err(e) => Response::error(e.to_string()),
        }
    }
}
