// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Addressable resources a query runs against.
//!
//! Resources form a small closed hierarchy where each child renders its
//! display path by prefixing its parent's display path:
//!
//! ```text
//! Catalog("sales")
//!   └── Schema("orders")          -> sales.orders
//!         └── Table("lines")      -> sales.orders.lines
//!               └── Column("qty") -> sales.orders.lines.qty
//! ```
//!
//! # Example
//! ```
//! use query_herald::model::Resource;
//!
//! let column = Resource::column("qty", Resource::table("lines", Resource::schema("orders", Resource::catalog("sales"))));
//! assert_eq!(column.display(), "sales.orders.lines.qty");
//! assert_eq!(column.category(), "column");
//! ```

use std::fmt::{Display, Formatter};

pub const ANY_QUERY: &str = "any_query";
pub const ANY_USER: &str = "any_user";
pub const SYSTEM_DISPLAY: &str = "any";
pub const UNKNOWN_DISPLAY: &str = "unknown-resource";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A session property, optionally scoped to a catalog.
    Session {
        name: String,
        catalog: Option<Box<Resource>>,
    },
    Catalog {
        name: String,
    },
    Schema {
        name: String,
        catalog: Box<Resource>,
    },
    Table {
        name: String,
        schema: Box<Resource>,
    },
    Column {
        name: String,
        table: Box<Resource>,
    },
    /// The rows of a table, as opposed to its structure.
    RowSet {
        table: Box<Resource>,
    },
    Function {
        name: String,
        schema: Box<Resource>,
    },
    Procedure {
        name: String,
        schema: Box<Resource>,
    },
    /// A query, possibly owned by a user. Both halves are wildcards when absent.
    Query {
        id: Option<String>,
        owner: Option<String>,
    },
    SystemInfo,
    Unknown,
}

impl Resource {
    pub fn session(name: impl Into<String>, catalog: Option<Resource>) -> Self {
        Resource::Session {
            name: name.into(),
            catalog: catalog.map(Box::new),
        }
    }

    pub fn catalog(name: impl Into<String>) -> Self {
        Resource::Catalog { name: name.into() }
    }

    pub fn schema(name: impl Into<String>, catalog: Resource) -> Self {
        Resource::Schema {
            name: name.into(),
            catalog: Box::new(catalog),
        }
    }

    pub fn table(name: impl Into<String>, schema: Resource) -> Self {
        Resource::Table {
            name: name.into(),
            schema: Box::new(schema),
        }
    }

    pub fn column(name: impl Into<String>, table: Resource) -> Self {
        Resource::Column {
            name: name.into(),
            table: Box::new(table),
        }
    }

    pub fn row_set(table: Resource) -> Self {
        Resource::RowSet {
            table: Box::new(table),
        }
    }

    pub fn function(name: impl Into<String>, schema: Resource) -> Self {
        Resource::Function {
            name: name.into(),
            schema: Box::new(schema),
        }
    }

    pub fn procedure(name: impl Into<String>, schema: Resource) -> Self {
        Resource::Procedure {
            name: name.into(),
            schema: Box::new(schema),
        }
    }

    pub fn query(id: Option<String>, owner: Option<String>) -> Self {
        Resource::Query { id, owner }
    }

    /// Fixed tag naming the kind of resource.
    pub fn category(&self) -> &'static str {
        match self {
            Resource::Session { .. } => "session",
            Resource::Catalog { .. } => "catalog",
            Resource::Schema { .. } => "schema",
            Resource::Table { .. } => "table",
            Resource::Column { .. } => "column",
            Resource::RowSet { .. } => "rows",
            Resource::Function { .. } => "function",
            Resource::Procedure { .. } => "procedure",
            Resource::Query { .. } => "query",
            Resource::SystemInfo => "system",
            Resource::Unknown => "unknown",
        }
    }

    /// Canonical dotted path of this resource.
    pub fn display(&self) -> String {
        match self {
            Resource::Session { name, catalog } => match catalog {
                Some(catalog) => format!("{}.{}", catalog.display(), name),
                None => name.clone(),
            },
            Resource::Catalog { name } => name.clone(),
            Resource::Schema { name, catalog } => format!("{}.{}", catalog.display(), name),
            Resource::Table { name, schema } => format!("{}.{}", schema.display(), name),
            Resource::Column { name, table } => format!("{}.{}", table.display(), name),
            Resource::RowSet { table } => format!("{}.*", table.display()),
            Resource::Function { name, schema } | Resource::Procedure { name, schema } => {
                format!("{}.{}", schema.display(), name)
            }
            Resource::Query { id, owner } => format!(
                "{}@{}",
                id.as_deref().unwrap_or(ANY_QUERY),
                owner.as_deref().unwrap_or(ANY_USER)
            ),
            Resource::SystemInfo => SYSTEM_DISPLAY.to_string(),
            Resource::Unknown => UNKNOWN_DISPLAY.to_string(),
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
