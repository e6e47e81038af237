//! In-memory filters over fetched collections
//!
//! Text filters are case-insensitive substring matches over a per-type set
//! of fields. An empty query keeps everything.

use crmdesk_domain::{
    Employee, Expense, Lead, LeadStatus, LeaveRequest, LeaveStatus, Sale, Trainer, WarehouseItem,
};

/// Fields a text filter looks at
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Whether `item` matches `query`.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Items whose searchable fields contain `query`.
pub fn filter_text<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches_query(*item, query)).collect()
}

pub fn leaves_with_status<'a>(
    items: impl IntoIterator<Item = &'a LeaveRequest>,
    status: LeaveStatus,
) -> Vec<&'a LeaveRequest> {
    items.into_iter().filter(|leave| leave.status == status).collect()
}

pub fn leads_with_status<'a>(
    items: impl IntoIterator<Item = &'a Lead>,
    status: LeadStatus,
) -> Vec<&'a Lead> {
    items.into_iter().filter(|lead| lead.status == status).collect()
}

pub fn low_stock<'a>(items: impl IntoIterator<Item = &'a WarehouseItem>) -> Vec<&'a WarehouseItem> {
    items.into_iter().filter(|item| item.is_low_stock()).collect()
}

fn push_opt<'a>(fields: &mut Vec<&'a str>, value: Option<&'a String>) {
    if let Some(value) = value {
        fields.push(value.as_str());
    }
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        push_opt(&mut fields, self.email.as_ref());
        push_opt(&mut fields, self.phone.as_ref());
        push_opt(&mut fields, self.company.as_ref());
        push_opt(&mut fields, self.source.as_ref());
        push_opt(&mut fields, self.assigned_to.as_ref());
        fields
    }
}

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.customer_name.as_str(), self.product.as_str()];
        push_opt(&mut fields, self.sold_by.as_ref());
        fields
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str(), self.role.as_str()];
        push_opt(&mut fields, self.department.as_ref());
        push_opt(&mut fields, self.designation.as_ref());
        fields
    }
}

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.employee_name.as_str(), self.leave_type.as_str()];
        push_opt(&mut fields, self.reason.as_ref());
        fields
    }
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.category.as_str()];
        push_opt(&mut fields, self.submitted_by.as_ref());
        fields
    }
}

impl Searchable for WarehouseItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.sku.as_str(), self.name.as_str()];
        push_opt(&mut fields, self.category.as_ref());
        push_opt(&mut fields, self.location.as_ref());
        fields
    }
}

impl Searchable for Trainer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        push_opt(&mut fields, self.specialization.as_ref());
        fields
    }
}
