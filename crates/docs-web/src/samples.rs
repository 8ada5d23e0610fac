//! Per-endpoint SDK code sample generation
//!
//! Produces illustrative snippets for the operation buttons on the docs
//! page. Samples are intentionally schematic: they show how to reach an
//! endpoint from each SDK, not a compilable program for every operation.

use crate::environment::DEFAULT_SERVER;

/// Languages a sample can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLanguage {
    /// Go SDK
    Go,
    /// PHP SDK
    Php,
    /// Rust SDK (this repository)
    Rust,
    /// TypeScript SDK
    TypeScript,
    /// Plain cURL
    Curl,
}

impl SampleLanguage {
    /// All supported languages, in tab order.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [Self::Go, Self::Php, Self::Rust, Self::TypeScript, Self::Curl]
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Php => "PHP",
            Self::Rust => "Rust",
            Self::TypeScript => "TypeScript",
            Self::Curl => "cURL",
        }
    }

    /// Parse a language from its label (case-insensitive).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "go" => Some(Self::Go),
            "php" => Some(Self::Php),
            "rust" => Some(Self::Rust),
            "typescript" | "ts" => Some(Self::TypeScript),
            "curl" => Some(Self::Curl),
            _ => None,
        }
    }
}

/// First path segment with `{`/`}` placeholders stripped.
#[must_use]
pub fn resource_name(path: &str) -> String {
    let cleaned: String = path.chars().filter(|c| *c != '{' && *c != '}').collect();
    cleaned
        .split('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("resource")
        .to_string()
}

/// Derive an SDK method name from an HTTP method and path
/// (e.g. `GET /products` becomes `getProducts`).
#[must_use]
pub fn function_name(method: &str, path: &str) -> String {
    let resource = resource_name(path);
    let mut chars = resource.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    format!("{}{capitalized}", method.to_lowercase())
}

/// Generate an illustrative SDK snippet for an endpoint.
#[must_use]
pub fn generate_sample(language: SampleLanguage, method: &str, path: &str) -> String {
    let method = method.to_uppercase();
    let resource = resource_name(path);
    let function = function_name(&method, path);

    match language {
        SampleLanguage::Go => format!(
            r#"package main

import (
    "context"
    "fmt"
    "log"

    lifeplus "github.com/newage-saint/lifeplus-go-sdk"
)

func main() {{
    client := lifeplus.NewClientWrapper(
        "{DEFAULT_SERVER}",
        "your-api-key-or-bearer-token",
    )

    resp, _, err := client.{resource}.{function}(context.Background())
    if err != nil {{
        log.Fatalf("Error: %v", err)
    }}

    fmt.Printf("Response: %+v\n", resp)
}}"#
        ),
        SampleLanguage::Php => format!(
            r#"<?php
require_once(__DIR__ . '/vendor/autoload.php');

use LifePlus\LifePlusClient;

$client = new LifePlusClient([
    'apiKey' => 'your-api-key-or-bearer-token',
    'baseUrl' => '{DEFAULT_SERVER}'
]);

try {{
    $response = $client->{resource}->{function}();
    print_r($response);
}} catch (Exception $e) {{
    echo "Error: " . $e->getMessage();
}}"#
        ),
        SampleLanguage::Rust => format!(
            r#"use lifeplus_api_client::LifePlusClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {{
    let mut client = LifePlusClient::new("{DEFAULT_SERVER}")?;
    client.set_access_token("your-api-key-or-bearer-token")?;

    // {method} {path}
    let response = client.{resource}();
    println!("{{response:?}}");

    Ok(())
}}"#
        ),
        SampleLanguage::TypeScript => format!(
            r#"import {{ LifePlusClient, Configuration }} from 'lifeplus-ts-sdk';

const config = new Configuration({{
  basePath: '{DEFAULT_SERVER}',
  accessToken: 'your-api-key-or-bearer-token'
}});

const client = new LifePlusClient(config);

client.{resource}.{function}()
  .then(response => console.log('Response:', response))
  .catch(error => console.error('Error:', error));"#
        ),
        SampleLanguage::Curl => format!(
            r#"curl -X {method} "{DEFAULT_SERVER}{path}" \
  -H "Authorization: Bearer YOUR_TOKEN" \
  -H "Content-Type: application/json" \
  -H "Accept: application/json""#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name("/products"), "products");
        assert_eq!(resource_name("/orders/{id}"), "orders");
        assert_eq!(resource_name("/"), "resource");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("GET", "/products"), "getProducts");
        assert_eq!(function_name("POST", "/orders"), "postOrders");
        assert_eq!(function_name("DELETE", "/cart/{id}"), "deleteCart");
    }

    #[test]
    fn test_every_language_mentions_the_derived_call() {
        for language in SampleLanguage::all() {
            let sample = generate_sample(language, "GET", "/doctors");
            match language {
                SampleLanguage::Curl => assert!(sample.contains("/doctors")),
                _ => assert!(sample.contains("doctors"), "{}", language.label()),
            }
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(SampleLanguage::from_label("Go"), Some(SampleLanguage::Go));
        assert_eq!(
            SampleLanguage::from_label("typescript"),
            Some(SampleLanguage::TypeScript)
        );
        assert_eq!(SampleLanguage::from_label("cobol"), None);
    }
}
