#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use zorori_application::ports::UpstreamExchange;
use zorori_domain::wire::Message;
use zorori_domain::{normalize, DomainError};

type Responder = Arc<dyn Fn(u16) -> Result<Vec<u8>, DomainError> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub server: IpAddr,
    pub name: String,
    pub recursion_desired: bool,
}

/// Scripted upstream keyed by `(server, question name)`. Responders get the
/// query ID so replies always match the query.
#[derive(Default)]
pub struct MockExchange {
    responders: Mutex<HashMap<(IpAddr, String), Responder>>,
    queries: Mutex<Vec<RecordedQuery>>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, server: IpAddr, name: &str, responder: F)
    where
        F: Fn(u16) -> Vec<u8> + Send + Sync + 'static,
    {
        self.responders
            .lock()
            .unwrap()
            .insert((server, normalize(name)), Arc::new(move |id| Ok(responder(id))));
    }

    pub fn fail(&self, server: IpAddr, name: &str, error: DomainError) {
        self.responders
            .lock()
            .unwrap()
            .insert((server, normalize(name)), Arc::new(move |_| Err(error.clone())));
    }

    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamExchange for MockExchange {
    async fn exchange(&self, server: IpAddr, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let message = Message::decode(query)?;
        let name = message.questions[0].name.clone();
        self.queries.lock().unwrap().push(RecordedQuery {
            server,
            name: name.clone(),
            recursion_desired: message.header.rd(),
        });

        let responder = self
            .responders
            .lock()
            .unwrap()
            .get(&(server, name.clone()))
            .cloned();
        match responder {
            Some(responder) => responder(message.id()),
            None => Err(DomainError::Transport {
                server: server.to_string(),
                reason: format!("no scripted reply for {}", name),
            }),
        }
    }
}
