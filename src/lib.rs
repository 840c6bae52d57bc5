//! Cycle Assessment - Menstrual-cycle self-assessment engine
//!
//! A seven-step collection wizard feeds a deterministic pattern classifier
//! and recommendation generator; finished assessments are handed to an
//! external persistence API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
