use std::sync::Arc;

use serde::Serialize;

use super::controller::FormController;
use super::transport::IntakeTransport;
use super::variant::FormVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingTab {
    QuickRequest,
    SelfSchedule,
}

/// Outbound hyperlink to the third-party scheduler. Nothing is passed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulerLink {
    pub url: String,
    pub opens_new_context: bool,
}

impl SchedulerLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            opens_new_context: true,
        }
    }
}

/// Booking modal with two independently stateful tabs sharing one transport.
pub struct BookingModal<T> {
    active: BookingTab,
    quick: FormController<T>,
    schedule: FormController<T>,
    scheduler: SchedulerLink,
}

impl<T> BookingModal<T>
where
    T: IntakeTransport + 'static,
{
    pub fn new(transport: Arc<T>, fallback_phone: &str, scheduler: SchedulerLink) -> Self {
        Self {
            active: BookingTab::QuickRequest,
            quick: FormController::new(
                FormVariant::booking_quick_request(),
                Arc::clone(&transport),
                fallback_phone,
            ),
            schedule: FormController::new(
                FormVariant::booking_self_schedule(),
                transport,
                fallback_phone,
            ),
            scheduler,
        }
    }

    pub fn active_tab(&self) -> BookingTab {
        self.active
    }

    /// Switching keeps whatever was typed into the other tab.
    pub fn switch_tab(&mut self, tab: BookingTab) {
        self.active = tab;
    }

    pub fn active(&self) -> &FormController<T> {
        self.tab(self.active)
    }

    pub fn active_mut(&mut self) -> &mut FormController<T> {
        match self.active {
            BookingTab::QuickRequest => &mut self.quick,
            BookingTab::SelfSchedule => &mut self.schedule,
        }
    }

    pub fn tab(&self, tab: BookingTab) -> &FormController<T> {
        match tab {
            BookingTab::QuickRequest => &self.quick,
            BookingTab::SelfSchedule => &self.schedule,
        }
    }

    pub fn scheduler_link(&self) -> &SchedulerLink {
        &self.scheduler
    }
}
