//! The moderation queue table.
//!
//! Renders the supplied records in order — sorting happens upstream, by
//! fetching against the URL sort parameters. Each row is rendered twice:
//! a stacked single-cell layout for narrow viewports and a multi-column
//! layout for wide ones; stylesheet media queries pick which is visible.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::components::load_more::LoadMoreButton;
use crate::components::loader::Loading;
use crate::components::review_state_icon::ReviewStateIcon;
use crate::components::subject_overview::SubjectOverview;
use crate::net::types::SubjectStatus;
use crate::state::sort::{SortDirection, use_sort_order};
use crate::util::relative_time;

/// Sortable, paginated table of subject moderation records.
///
/// The caller owns the sequence and pagination: `on_load_more` is expected
/// to fetch the next page and hand back a longer sequence.
#[component]
pub fn SubjectTable(
    #[prop(into)] subjects: Signal<Vec<SubjectStatus>>,
    #[prop(into)] show_load_more: Signal<bool>,
    #[prop(into)] is_initial_loading: Signal<bool>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="subject-table">
            <table class="subject-table__table">
                <thead>
                    <SubjectRowHead/>
                </thead>
                <tbody>
                    <Show when=move || subjects.with(Vec::is_empty)>
                        <EmptyRows is_initial_loading=is_initial_loading/>
                    </Show>
                    {move || {
                        subjects
                            .get()
                            .into_iter()
                            .map(|subject_status| {
                                view! { <SubjectRow subject_status=subject_status/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || show_load_more.get()>
                <div class="subject-table__footer">
                    <LoadMoreButton on_click=on_load_more/>
                </div>
            </Show>
        </div>
    }
}

/// One subject, rendered for both layouts at once.
#[component]
fn SubjectRow(subject_status: SubjectStatus) -> impl IntoView {
    let s = subject_status;
    let comment_narrow = s.comment.clone();
    let comment_wide = s.comment.clone();
    let overview_narrow = (s.subject.clone(), s.subject_repo_handle.clone());
    let overview_wide = (s.subject.clone(), s.subject_repo_handle.clone());

    view! {
        <tr>
            // Narrow layout: everything stacked into one cell.
            <td class="subject-table__cell subject-table__cell--narrow">
                <div class="subject-table__narrow-head">
                    <ReviewStateIcon state=s.review_state size="review-state-icon--sm"/>
                    <SubjectOverview
                        subject=overview_narrow.0
                        subject_repo_handle=overview_narrow.1
                        with_truncation=false
                    />
                </div>
                <dl class="subject-table__narrow-details">
                    {narrow_entry("Created", s.created_at)}
                    {narrow_entry("Last Reviewed", s.last_reviewed_at)}
                    {narrow_entry("Last Reported", s.last_reported_at)}
                    {comment_narrow
                        .filter(|c| !c.is_empty())
                        .map(|comment| {
                            view! {
                                <div class="subject-table__narrow-entry">
                                    <dt>"Comment"</dt>
                                    <dd>{comment}</dd>
                                </div>
                            }
                        })}
                </dl>
            </td>

            // Wide layout: one cell per column.
            <td class="subject-table__cell subject-table__cell--wide subject-table__cell--center">
                <ReviewStateIcon state=s.review_state/>
            </td>
            <td class="subject-table__cell subject-table__cell--wide">
                <SubjectOverview subject=overview_wide.0 subject_repo_handle=overview_wide.1/>
            </td>
            <td class="subject-table__cell subject-table__cell--wide">
                {timestamp_cell(s.created_at)}
            </td>
            <td class="subject-table__cell subject-table__cell--wide subject-table__cell--note">
                {timestamp_cell(s.last_reviewed_at)}
                {comment_wide
                    .filter(|c| !c.is_empty())
                    .map(|comment| {
                        view! {
                            <br/>
                            <span class="subject-table__comment">{comment}</span>
                        }
                    })}
            </td>
            <td class="subject-table__cell subject-table__cell--wide">
                {timestamp_cell(s.last_reported_at)}
            </td>
        </tr>
    }
}

/// Relative duration with the absolute instant as hover text. Absent
/// timestamps render nothing at all.
fn timestamp_cell(ts: Option<DateTime<Utc>>) -> Option<impl IntoView> {
    ts.map(|t| {
        view! {
            <span title=relative_time::absolute(t)>{relative_time::from_now(t)}</span>
        }
    })
}

/// Labeled relative timestamp line for the narrow layout.
fn narrow_entry(label: &'static str, ts: Option<DateTime<Utc>>) -> Option<impl IntoView> {
    ts.map(|t| {
        view! {
            <div class="subject-table__narrow-entry">
                <dt>{label}</dt>
                <dd>{relative_time::from_now(t)}</dd>
            </div>
        }
    })
}

/// Header row. Column labels and sort indicators derive from the URL
/// sort state; the reviewed/reported columns carry toggle links.
#[component]
fn SubjectRowHead() -> impl IntoView {
    let order = use_sort_order();

    let indicator = move |field: &'static str| {
        move || {
            order
                .get()
                .indicator_for(field)
                .map(|direction| view! { <SortChevron direction=direction/> })
        }
    };

    view! {
        <tr>
            <th class="subject-table__heading subject-table__heading--narrow">
                <span class="sr-only">"Id"</span>
            </th>
            <th class="subject-table__heading subject-table__heading--wide subject-table__cell--center">
                "Status"
            </th>
            <th class="subject-table__heading subject-table__heading--wide">"Subject"</th>
            <th class="subject-table__heading subject-table__heading--wide">
                "Created"
                {indicator("createdAt")}
            </th>
            <th class="subject-table__heading subject-table__heading--wide">
                <a href=move || order.get().toggle_reverse_order_link("lastReviewedAt")>
                    "Last Reviewed/Note"
                    {indicator("lastReviewedAt")}
                </a>
            </th>
            <th class="subject-table__heading subject-table__heading--wide">
                <a href=move || order.get().toggle_reverse_order_link("lastReportedAt")>
                    "Last Reported"
                    {indicator("lastReportedAt")}
                </a>
            </th>
        </tr>
    }
}

/// Direction chevron next to the active sort column's label.
#[component]
fn SortChevron(direction: SortDirection) -> impl IntoView {
    view! {
        <svg class="sort-chevron" viewBox="0 0 20 20" aria-hidden="true">
            {match direction {
                SortDirection::Asc => view! { <path d="M4 13 L10 7 L16 13"></path> }.into_any(),
                SortDirection::Desc => view! { <path d="M4 7 L10 13 L16 7"></path> }.into_any(),
            }}
        </svg>
    }
}

/// Placeholder row while the queue is empty: a loading indicator during
/// the initial fetch, a success indicator once the queue is known empty.
/// The two are mutually exclusive.
#[component]
fn EmptyRows(#[prop(into)] is_initial_loading: Signal<bool>) -> impl IntoView {
    view! {
        <tr>
            <td class="subject-table__empty" colspan="5">
                <Show
                    when=move || is_initial_loading.get()
                    fallback=|| {
                        view! {
                            <p class="subject-table__empty-done">
                                <svg
                                    class="subject-table__empty-check"
                                    viewBox="0 0 20 20"
                                    aria-hidden="true"
                                >
                                    <circle cx="10" cy="10" r="8" fill="none"></circle>
                                    <path d="M6 10 L9 13 L14 7" fill="none"></path>
                                </svg>
                                "Moderation queue is empty"
                            </p>
                        }
                    }
                >
                    <Loading/>
                    <p class="subject-table__empty-loading">"Loading moderation queue..."</p>
                </Show>
            </td>
        </tr>
    }
}
