#![allow(dead_code)]

pub mod mock_service {
    //! Minimal stand-in for the asset service, recording every request.

    use std::io::Read;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use tiny_http::{Header, Response, Server};

    #[derive(Debug, Clone)]
    pub struct Recorded {
        pub method: String,
        pub path: String,
        pub authorization: Option<String>,
        pub body: String,
    }

    pub struct MockService {
        pub base_url: String,
        requests: Arc<Mutex<Vec<Recorded>>>,
    }

    /// Canned `(status, body)` for one path, replacing the default reply.
    pub type Route = (&'static str, u16, &'static str);

    fn default_reply(path: &str) -> &'static str {
        match path {
            "/api/dashboard/stats" => {
                r#"{"success":true,"data":{"total_assets":12,"active_assets":10,"total_users":3,"total_value":1234.5}}"#
            }
            "/api/trial/status" => {
                r#"{"success":true,"data":{"days_remaining":9,"is_expired":false,"is_active":true,"subscription_plan":"trial"}}"#
            }
            "/api/assets" => r#"{"success":true,"data":[{"id":1},{"id":2}]}"#,
            _ => r#"{"success":true,"message":"ok"}"#,
        }
    }

    impl MockService {
        /// Start a server answering `/api/login` with `login_body`.
        ///
        /// Every other path answers `{"success":true,"data":...}` with a
        /// payload shaped like the real endpoint.
        pub fn start(login_body: &'static str) -> Self {
            Self::start_with(login_body, Vec::new())
        }

        /// Like [`MockService::start`], with `routes` overriding single paths.
        pub fn start_with(login_body: &'static str, routes: Vec<Route>) -> Self {
            let server = Server::http("127.0.0.1:0").unwrap();
            let addr = server.server_addr().to_ip().unwrap();
            let requests = Arc::new(Mutex::new(Vec::new()));
            let log = Arc::clone(&requests);

            thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let path = request.url().to_string();
                    let authorization = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string());
                    log.lock().unwrap().push(Recorded {
                        method: request.method().as_str().to_string(),
                        path: path.clone(),
                        authorization,
                        body,
                    });

                    let (status, reply) = if path == "/api/login" {
                        (200, login_body)
                    } else {
                        routes
                            .iter()
                            .find(|(route, _, _)| *route == path)
                            .map(|(_, status, body)| (*status, *body))
                            .unwrap_or((200, default_reply(&path)))
                    };
                    let header =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                    let _ = request.respond(
                        Response::from_string(reply)
                            .with_status_code(status)
                            .with_header(header),
                    );
                }
            });

            Self {
                base_url: format!("http://{addr}"),
                requests,
            }
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }
}

pub mod attack {
    use std::sync::Arc;

    use asset_loadtest::config::{LoadTestConfig, ThinkTime};
    use asset_loadtest::scenarios::{self, Profile};
    use goose::config::GooseConfiguration;
    use goose::metrics::GooseMetrics;
    use goose::prelude::*;

    /// Config with short think-times so a two second run does real work.
    pub fn fast_config() -> LoadTestConfig {
        let mut config = LoadTestConfig::default();
        config.seed = Some(7);
        config.single.think_time = ThinkTime::from_millis(10, 20);
        config.bulk.think_time = ThinkTime::from_millis(10, 20);
        config
    }

    /// Run `profile` against `host` for two seconds and return goose's metrics.
    ///
    /// Metrics are not reset after ramp-up so logins stay in the counts.
    pub async fn run(
        host: &str,
        profile: Profile,
        users: usize,
        config: LoadTestConfig,
    ) -> GooseMetrics {
        let config = Arc::new(config);
        let attack = GooseAttack::initialize_with_config(GooseConfiguration::default())
            .unwrap()
            .set_default(GooseDefault::Host, host)
            .unwrap()
            .set_default(GooseDefault::Users, users)
            .unwrap()
            .set_default(GooseDefault::HatchRate, "10")
            .unwrap()
            .set_default(GooseDefault::RunTime, 2)
            .unwrap()
            .set_default(GooseDefault::NoResetMetrics, true)
            .unwrap()
            .set_default(GooseDefault::NoTelnet, true)
            .unwrap()
            .set_default(GooseDefault::NoWebSocket, true)
            .unwrap();
        scenarios::register(*attack, profile, &config)
            .unwrap()
            .execute()
            .await
            .unwrap()
    }

    /// `(successes, failures)` summed over every request name ending in `path`.
    ///
    /// Goose keys requests by transaction name (`"POST /addAsset"`) or by raw
    /// path depending on how the request was built; both end with the path.
    pub fn counts(metrics: &GooseMetrics, path: &str) -> (usize, usize) {
        metrics
            .requests
            .values()
            .filter(|aggregate| aggregate.path.ends_with(path))
            .fold((0, 0), |(ok, failed), aggregate| {
                (ok + aggregate.success_count, failed + aggregate.fail_count)
            })
    }
}
