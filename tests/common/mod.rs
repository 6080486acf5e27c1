#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::FutureExt;
use http::StatusCode;
use junction::{
    handler_fn, AfterMiddleware, AfterMiddlewareService, AfterNext, Ctx, Error, Execution,
    HandlerService, Middleware, MiddlewareService, Next, Outcome, Request, Response, Result,
};

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Appends its name to the log, then continues the chain.
pub struct Record {
    name: &'static str,
    log: Log,
}

impl Record {
    pub fn service(name: &'static str, log: &Log) -> MiddlewareService {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

#[async_trait]
impl Middleware for Record {
    async fn run(&self, _ctx: Arc<Ctx>, request: Request, next: Next) -> Result<Response> {
        self.log.lock().unwrap().push(self.name.to_string());
        next.run(request).await
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Writes a response without invoking the next stage.
pub struct ShortCircuit {
    name: &'static str,
    log: Log,
    status: StatusCode,
}

impl ShortCircuit {
    pub fn service(name: &'static str, log: &Log, status: StatusCode) -> MiddlewareService {
        Arc::new(Self {
            name,
            log: log.clone(),
            status,
        })
    }
}

#[async_trait]
impl Middleware for ShortCircuit {
    async fn run(&self, _ctx: Arc<Ctx>, _request: Request, _next: Next) -> Result<Response> {
        self.log.lock().unwrap().push(self.name.to_string());
        Ok(Response::new(self.status))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Aborts the chain with an error instead of a response.
pub struct Fail {
    name: &'static str,
    log: Log,
}

impl Fail {
    pub fn service(name: &'static str, log: &Log) -> MiddlewareService {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

#[async_trait]
impl Middleware for Fail {
    async fn run(&self, _ctx: Arc<Ctx>, _request: Request, _next: Next) -> Result<Response> {
        self.log.lock().unwrap().push(self.name.to_string());
        Err(Error::status(StatusCode::INTERNAL_SERVER_ERROR))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Appends its name to the log, then continues the after chain.
pub struct RecordAfter {
    name: &'static str,
    log: Log,
}

impl RecordAfter {
    pub fn service(name: &'static str, log: &Log) -> AfterMiddlewareService {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

#[async_trait]
impl AfterMiddleware for RecordAfter {
    async fn run(&self, _ctx: Arc<Ctx>, response: Response, next: AfterNext) -> Result<Response> {
        self.log.lock().unwrap().push(self.name.to_string());
        next.run(response).await
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub fn recording_handler(log: &Log) -> HandlerService {
    let log = log.clone();
    handler_fn(move |_ctx, _request| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push("handler".to_string());
            Ok(Response::new(StatusCode::OK))
        }
        .boxed()
    })
}

pub fn body_handler(body: &'static str) -> HandlerService {
    handler_fn(move |_ctx, _request| {
        async move { Ok(Response::new(StatusCode::OK).with_body(body)) }.boxed()
    })
}

pub fn ok_handler() -> HandlerService {
    handler_fn(|_ctx, _request| async move { Ok(Response::new(StatusCode::OK)) }.boxed())
}

pub fn expect_match(outcome: Outcome) -> Execution {
    outcome.into_execution().expect("expected a match")
}
