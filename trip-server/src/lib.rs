//! Trip planner server.
//!
//! A web application that answers: "How can I get from here to there, and
//! what will each way cost me in time, money and carbon?"

pub mod airports;
pub mod domain;
pub mod geocode;
pub mod planner;
pub mod routing;
pub mod web;

#[cfg(test)]
mod stub_server;
