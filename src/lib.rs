//! Sama Wellness - Conversational Wellness Backend
//!
//! This crate implements the dosha assessment onboarding flow and the
//! daily check-in pipeline (emotion inference, prompt building, LLM reply)
//! behind a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
