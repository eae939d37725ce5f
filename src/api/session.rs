use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AnalysisPayload, VariableAnalysis};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ActiveDay, HoverPoint, LegendStateMachine};

use super::{ChartSessionConfig, StaleResponsePolicy, StyleTable};

/// Identifies one outstanding analysis request.
///
/// Tickets increase monotonically within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Loading,
    Ready,
    /// Fetch failure message, shown verbatim.
    Failed(String),
}

impl SessionStatus {
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Ready => None,
            Self::Loading => Some("Loading...".to_owned()),
            Self::Failed(message) => Some(message.clone()),
        }
    }
}

/// Input to `ChartSession::apply`.
#[derive(Debug)]
pub enum ChartEvent {
    /// The external data source finished the request identified by `ticket`.
    FetchResolved {
        ticket: FetchTicket,
        outcome: ChartResult<AnalysisPayload>,
    },
    VariableSelected {
        name: String,
    },
    LegendClick {
        label: String,
    },
    HoverActivated {
        points: Vec<HoverPoint>,
    },
    HoverCleared,
}

/// Single-session chart state: the current payload and what the user did
/// with it.
///
/// Events are applied by value (`session.apply(event)` returns the next
/// session); derived output is rebuilt from scratch by `frame`.
#[derive(Debug, Clone)]
pub struct ChartSession {
    pub(super) config: ChartSessionConfig,
    pub(super) payload: Option<AnalysisPayload>,
    pub(super) variable: Option<String>,
    pub(super) legend: LegendStateMachine,
    pub(super) styles: StyleTable,
    pub(super) hover_points: Vec<HoverPoint>,
    pub(super) status: SessionStatus,
    latest_ticket: FetchTicket,
}

impl ChartSession {
    pub fn new(config: ChartSessionConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            payload: None,
            variable: None,
            legend: LegendStateMachine::new(),
            styles: StyleTable::default(),
            hover_points: Vec::new(),
            status: SessionStatus::Idle,
            latest_ticket: FetchTicket::default(),
        })
    }

    /// Session with `payload` already loaded, as if a fetch had resolved.
    pub fn with_payload(config: ChartSessionConfig, payload: AnalysisPayload) -> ChartResult<Self> {
        let (session, ticket) = Self::new(config)?.begin_fetch();
        Ok(session.apply(ChartEvent::FetchResolved {
            ticket,
            outcome: Ok(payload),
        }))
    }

    /// Registers a new outstanding request and returns its ticket.
    #[must_use]
    pub fn begin_fetch(mut self) -> (Self, FetchTicket) {
        self.latest_ticket = FetchTicket(self.latest_ticket.0 + 1);
        self.status = SessionStatus::Loading;
        debug!(ticket = self.latest_ticket.0, "analysis fetch started");
        let ticket = self.latest_ticket;
        (self, ticket)
    }

    #[must_use]
    pub fn apply(mut self, event: ChartEvent) -> Self {
        match event {
            ChartEvent::FetchResolved { ticket, outcome } => self.on_fetch_resolved(ticket, outcome),
            ChartEvent::VariableSelected { name } => self.on_variable_selected(&name),
            ChartEvent::LegendClick { label } => self.on_legend_click(&label),
            ChartEvent::HoverActivated { points } => self.hover_points = points,
            ChartEvent::HoverCleared => self.hover_points.clear(),
        }
        self
    }

    fn on_fetch_resolved(&mut self, ticket: FetchTicket, outcome: ChartResult<AnalysisPayload>) {
        if ticket < self.latest_ticket
            && self.config.stale_response_policy == StaleResponsePolicy::IgnoreSuperseded
        {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket.0,
                "ignoring superseded analysis response"
            );
            return;
        }

        self.legend.reset();
        self.hover_points.clear();
        match outcome {
            Ok(payload) => {
                debug!(
                    ticket = ticket.0,
                    variable_count = payload.len(),
                    "analysis loaded"
                );
                self.variable = payload.first_variable_name().map(str::to_owned);
                self.payload = Some(payload);
                self.status = SessionStatus::Ready;
            }
            Err(err) => {
                warn!(ticket = ticket.0, error = %err, "analysis fetch failed");
                self.variable = None;
                self.payload = None;
                self.status = SessionStatus::Failed(err.to_string());
            }
        }
        self.rebuild_styles();
    }

    fn on_variable_selected(&mut self, name: &str) {
        let known = self
            .payload
            .as_ref()
            .is_some_and(|payload| payload.variable(name).is_some());
        if !known {
            warn!(variable = name, "ignoring selection of unknown variable");
            return;
        }
        if self.variable.as_deref() == Some(name) {
            return;
        }
        debug!(variable = name, "variable selected");
        self.variable = Some(name.to_owned());
        self.legend.reset();
        self.hover_points.clear();
        self.rebuild_styles();
    }

    fn on_legend_click(&mut self, label: &str) {
        let Some(variable) = self
            .payload
            .as_ref()
            .zip(self.variable.as_deref())
            .and_then(|(payload, name)| payload.variable(name))
        else {
            warn!(label, "legend click without loaded analysis");
            return;
        };
        let previous = self.legend.active_day().clone();
        match self.legend.on_legend_click(label, variable) {
            Ok(_) if *self.legend.active_day() != previous => self.hover_points.clear(),
            Ok(_) => {}
            Err(err @ ChartError::MissingSeries { .. }) => {
                warn!(error = %err, "legend click ignored");
            }
            Err(err) => {
                warn!(error = %err, "legend click failed");
            }
        }
    }

    fn rebuild_styles(&mut self) {
        self.styles = match self.variable() {
            Some(variable) => StyleTable::for_variable(variable, &self.config),
            None => StyleTable::default(),
        };
    }

    #[must_use]
    pub fn config(&self) -> &ChartSessionConfig {
        &self.config
    }

    #[must_use]
    pub fn payload(&self) -> Option<&AnalysisPayload> {
        self.payload.as_ref()
    }

    #[must_use]
    pub fn variable_name(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    #[must_use]
    pub fn variable(&self) -> Option<&VariableAnalysis> {
        let name = self.variable.as_deref()?;
        self.payload.as_ref()?.variable(name)
    }

    /// `(variable name, display name)` pairs in payload order.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, &str)> {
        self.payload
            .iter()
            .flat_map(|payload| payload.variables())
            .map(|(name, variable)| (name, variable.metadata.display_name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn active_day(&self) -> &ActiveDay {
        self.legend.active_day()
    }

    #[must_use]
    pub fn hover_points(&self) -> &[HoverPoint] {
        &self.hover_points
    }

    #[must_use]
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    #[must_use]
    pub fn latest_ticket(&self) -> FetchTicket {
        self.latest_ticket
    }
}
