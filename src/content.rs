//! Feature cards shown on the landing page.

use slidekit_ui::{Card, Color};

/// One ERP module advertised on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub summary: &'static str,
    pub accent: Color,
}

impl Feature {
    pub fn card(&self) -> Card {
        Card::new(self.title, self.summary).accent(self.accent)
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Inventory",
        summary: "Real time stock levels across every warehouse, with reorder points and lot tracking.",
        accent: Color::rgb(0.15, 0.39, 0.92),
    },
    Feature {
        title: "Finance",
        summary: "General ledger, receivables and payables that close the month in days, not weeks.",
        accent: Color::rgb(0.09, 0.64, 0.29),
    },
    Feature {
        title: "Sales",
        summary: "Quotes become orders and invoices without retyping a single line.",
        accent: Color::rgb(0.92, 0.35, 0.05),
    },
    Feature {
        title: "Purchasing",
        summary: "Supplier catalogs, approvals and three-way matching in one place.",
        accent: Color::rgb(0.58, 0.2, 0.92),
    },
    Feature {
        title: "Manufacturing",
        summary: "Bills of materials, work orders and capacity planning on the shop floor.",
        accent: Color::rgb(0.86, 0.15, 0.15),
    },
    Feature {
        title: "Reporting",
        summary: "Dashboards built on live data, shared with the people who need them.",
        accent: Color::rgb(0.05, 0.58, 0.53),
    },
];
