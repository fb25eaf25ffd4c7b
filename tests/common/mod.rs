//! In-memory Storefront data source shared by the loader and route tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use shopify_storefront::queries::{I18n, QueryDocument};
use shopify_storefront::{CountryCode, Storefront, StorefrontError};

/// How the fake answers one operation.
#[derive(Clone, Debug)]
pub enum Reply {
    Data(Value),
    Fail(&'static str),
    Panic,
    /// Never answers.
    Hang,
}

/// Answers queries by operation name and records every call.
#[derive(Debug, Default)]
pub struct FakeStorefront {
    replies: HashMap<&'static str, Reply>,
    calls: Mutex<Vec<(String, Value)>>,
    country: Option<CountryCode>,
}

impl FakeStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, operation: &'static str, reply: Reply) -> Self {
        self.replies.insert(operation, reply);
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(CountryCode::new(country).unwrap());
        self
    }

    /// Variables of every call to `operation`, in call order.
    pub fn calls_to(&self, operation: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == operation)
            .map(|(_, variables)| variables.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Storefront for FakeStorefront {
    fn query<V, T>(
        &self,
        document: &'static QueryDocument,
        variables: &V,
    ) -> impl Future<Output = Result<T, StorefrontError>> + Send
    where
        V: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let operation = document.operation_name();
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), serde_json::to_value(variables).unwrap()));

        let reply = self.replies.get(operation);
        let hang = matches!(reply, Some(Reply::Hang));
        let result: Result<T, StorefrontError> = match reply {
            Some(Reply::Data(data)) => serde_json::from_value(data.clone()).map_err(Into::into),
            Some(Reply::Fail(message)) => Err(StorefrontError::Graphql {
                messages: vec![(*message).to_string()],
            }),
            Some(Reply::Panic) => panic!("{operation} exploded"),
            Some(Reply::Hang) | None => Err(StorefrontError::MissingData),
        };
        async move {
            if hang {
                std::future::pending::<()>().await;
            }
            result
        }
    }

    fn i18n(&self) -> I18n {
        I18n {
            country: self.country.clone(),
            language: None,
        }
    }
}

pub fn product(handle: &str, title: &str, amount: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Product/{handle}"),
        "handle": handle,
        "title": title,
        "featuredImage": {
            "id": null,
            "altText": null,
            "url": format!("https://cdn.shopify.com/{handle}.png"),
            "width": 400,
            "height": 400
        },
        "priceRange": {
            "minVariantPrice": {"amount": amount, "currencyCode": "USD"},
            "maxVariantPrice": {"amount": amount, "currencyCode": "USD"}
        },
        "variants": {
            "nodes": [{"selectedOptions": [{"name": "Size", "value": "M"}]}]
        }
    })
}

pub fn connection(nodes: Vec<Value>, has_next_page: bool) -> Value {
    json!({
        "nodes": nodes,
        "pageInfo": {
            "hasPreviousPage": false,
            "hasNextPage": has_next_page,
            "startCursor": "cursor-start",
            "endCursor": "cursor-end"
        }
    })
}

pub fn collection_data(handle: &str, title: &str) -> Value {
    json!({
        "collection": {
            "id": format!("gid://shopify/Collection/{handle}"),
            "handle": handle,
            "title": title,
            "description": "Warm things for cold days",
            "products": connection(
                vec![
                    product("wool-hat", "Wool Hat", "25.0"),
                    product("scarf", "Scarf", "40.5"),
                ],
                true,
            )
        }
    })
}

pub fn catalog_data() -> Value {
    json!({
        "products": connection(vec![product("snowboard", "The Snowboard", "629.95")], false)
    })
}

pub fn shop_data(name: &str) -> Value {
    json!({"shop": {"name": name, "description": null}})
}
