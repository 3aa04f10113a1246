// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod bootstrap;
pub mod bundle;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod ownership;
pub mod reconcilers;
pub mod resource;

#[cfg(test)]
pub mod test_utils;
