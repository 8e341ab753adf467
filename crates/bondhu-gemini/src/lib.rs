// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini adapter for the Bondhu bot.
//!
//! Implements [`bondhu_core::GenerationProvider`] over the Gemini
//! `generateContent` REST endpoint, with per-language system
//! instructions for code generation and question answering.

pub mod client;
pub mod instructions;
pub mod types;

pub use client::GeminiClient;
