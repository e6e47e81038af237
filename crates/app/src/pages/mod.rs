//! Page views, one per route
//!
//! Every page is a [`View`](crmdesk_core::View) over the collection it
//! fetches plus the local filters and actions that route offers. [`open`]
//! runs the guard and role gate, mounts the page, loads it once and renders
//! it inside the navigation shell.

pub mod challans;
pub mod dashboard;
pub mod employees;
pub mod expenses;
pub mod leads;
pub mod leaves;
pub mod login;
pub mod register;
pub mod returns;
pub mod sales;
pub mod trainers;
pub mod warehouse;

use std::fmt::Write as _;
use std::future::Future;
use std::str::FromStr;
use std::time::Instant;

use crmdesk_core::GuardOutcome;
use crmdesk_domain::{CrmError, LeadStatus, LeaveStatus, NewReturn, Result};
use tracing::instrument;

pub use challans::ChallansPage;
pub use dashboard::{DashboardData, DashboardPage};
pub use employees::EmployeesPage;
pub use expenses::ExpensesPage;
pub use leads::LeadsPage;
pub use leaves::LeavesPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use returns::ReturnsPage;
pub use sales::SalesPage;
pub use trainers::TrainersPage;
pub use warehouse::WarehousePage;

use crate::context::AppContext;
use crate::render::heading;
use crate::routes::Route;
use crate::utils::logging::log_page_execution;

pub const ACCESS_DENIED: &str = "You do not have access to this page.";

/// Outcome of a page step that can report whether it succeeded.
pub(crate) trait Succeeded {
    fn succeeded(&self) -> bool;
}

impl Succeeded for bool {
    fn succeeded(&self) -> bool {
        *self
    }
}

impl<T> Succeeded for Option<T> {
    fn succeeded(&self) -> bool {
        self.is_some()
    }
}

/// Time a page step and record it.
pub(crate) async fn track<T, F>(route: Route, action: &str, fut: F) -> T
where
    T: Succeeded,
    F: Future<Output = T>,
{
    let start = Instant::now();
    let out = fut.await;
    log_page_execution(route.path(), action, start.elapsed(), out.succeeded());
    out
}

/// Local narrowing applied after the fetch
#[derive(Debug, Clone, Default)]
pub struct PageFilters {
    pub query: String,
    pub status: Option<String>,
}

impl PageFilters {
    fn parsed_status<S: FromStr<Err = String>>(&self) -> Result<Option<S>> {
        self.status
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| raw.parse::<S>().map_err(CrmError::Validation))
            .transpose()
    }
}

/// What visiting a route produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Rendered(String),
    Redirect(String),
}

/// A write a page offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    ApproveLeave(String),
    RejectLeave(String),
    ResetPassword { user_id: String, password: String },
    CreateReturn(NewReturn),
}

/// Visit `route`: guard, load once, render.
///
/// Load failures do not fail the visit; they are raised as toasts and the
/// page renders with whatever data it has.
///
/// # Errors
///
/// Returns [`CrmError::Validation`] for a status filter the route cannot
/// parse.
#[instrument(skip(ctx, filters))]
pub async fn open(ctx: &AppContext, route: Route, filters: &PageFilters) -> Result<PageOutcome> {
    if let Some(outcome) = gate(ctx, route) {
        return Ok(outcome);
    }

    let body = render_route(ctx, route, filters, ctx.config.ui.page_size).await?;
    Ok(PageOutcome::Rendered(layout(ctx, route, &body)))
}

/// Visit `route`, run one write on it, then render the reloaded page.
///
/// A failed write is raised as a toast and the page renders the data it
/// loaded on mount.
///
/// # Errors
///
/// Returns [`CrmError::Validation`] when `action` is not offered by `route`
/// or the status filter cannot be parsed.
#[instrument(skip(ctx, action, filters))]
pub async fn act(
    ctx: &AppContext,
    route: Route,
    action: PageAction,
    filters: &PageFilters,
) -> Result<PageOutcome> {
    if let Some(outcome) = gate(ctx, route) {
        return Ok(outcome);
    }

    let limit = ctx.config.ui.page_size;
    let body = match (route, action) {
        (Route::Leaves | Route::PendingLeaves, PageAction::ApproveLeave(id)) => {
            let mut page = leaves_page(ctx, route, filters)?;
            page.load(ctx).await;
            page.approve(ctx, &id).await;
            page.render(limit)
        }
        (Route::Leaves | Route::PendingLeaves, PageAction::RejectLeave(id)) => {
            let mut page = leaves_page(ctx, route, filters)?;
            page.load(ctx).await;
            page.reject(ctx, &id).await;
            page.render(limit)
        }
        (Route::Employees, PageAction::ResetPassword { user_id, password }) => {
            let mut page = EmployeesPage::new(ctx).with_query(filters.query.as_str());
            page.load(ctx).await;
            page.reset_password(ctx, &user_id, &password).await;
            page.render(limit)
        }
        (Route::Returns, PageAction::CreateReturn(request)) => {
            let mut page = ReturnsPage::new(ctx);
            page.load(ctx).await;
            page.create(ctx, request).await;
            page.render(limit)
        }
        (route, _) => {
            return Err(CrmError::Validation(format!(
                "That action is not available on {}",
                route.path()
            )));
        }
    };

    Ok(PageOutcome::Rendered(layout(ctx, route, &body)))
}

/// Guard redirect or role denial, if either applies.
fn gate(ctx: &AppContext, route: Route) -> Option<PageOutcome> {
    if route.is_protected() {
        if let GuardOutcome::Redirect(target) = ctx.guard().check() {
            return Some(PageOutcome::Redirect(target));
        }
    }
    if route.requires_staff_role() && !ctx.can_manage_staff() {
        return Some(PageOutcome::Rendered(layout(ctx, route, ACCESS_DENIED)));
    }
    None
}

async fn render_route(ctx: &AppContext, route: Route, filters: &PageFilters, limit: usize) -> Result<String> {
    let query = filters.query.as_str();
    let body = match route {
        Route::Login => LoginPage::new(ctx).render(),
        Route::Register => RegisterPage::new(ctx).render(),
        Route::Dashboard => {
            let mut page = DashboardPage::new(ctx);
            page.load(ctx).await;
            page.render()
        }
        Route::Leads => {
            let status = filters.parsed_status::<LeadStatus>()?;
            let mut page = LeadsPage::new(ctx).with_query(query).with_status(status);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Sales => {
            let mut page = SalesPage::new(ctx).with_query(query);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Employees => {
            let mut page = EmployeesPage::new(ctx).with_query(query);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Leaves | Route::PendingLeaves => {
            let mut page = leaves_page(ctx, route, filters)?;
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Expenses => {
            let mut page = ExpensesPage::new(ctx).with_query(query);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Warehouse => {
            let mut page = WarehousePage::new(ctx).with_query(query);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Returns => {
            let mut page = ReturnsPage::new(ctx);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::Trainers => {
            let mut page = TrainersPage::new(ctx).with_query(query);
            page.load(ctx).await;
            page.render(limit)
        }
        Route::DeliveryChallans => {
            let mut page = ChallansPage::new(ctx);
            page.load(ctx).await;
            page.render()
        }
    };
    Ok(body)
}

fn leaves_page(ctx: &AppContext, route: Route, filters: &PageFilters) -> Result<LeavesPage> {
    if route == Route::PendingLeaves {
        return Ok(LeavesPage::pending(ctx));
    }
    Ok(LeavesPage::new(ctx).with_status(filters.parsed_status::<LeaveStatus>()?))
}

/// Heading, sidebar (unless collapsed), signed-in user, then the body.
fn layout(ctx: &AppContext, route: Route, body: &str) -> String {
    let mut out = heading(route.title());
    out.push('\n');

    if route.is_protected() {
        if !ctx.sidebar.is_collapsed() {
            let nav: Vec<&str> = Route::ALL
                .iter()
                .filter(|r| r.is_protected())
                .filter(|r| !r.requires_staff_role() || ctx.can_manage_staff())
                .map(|r| if *r == route { r.title() } else { r.path() })
                .collect();
            let _ = writeln!(out, "nav: {}", nav.join(" | "));
        }
        if let Some(user) = ctx.current_user() {
            let _ = writeln!(out, "signed in as {} ({})", user.name, user.role);
        }
        out.push('\n');
    }

    out.push_str(body);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
