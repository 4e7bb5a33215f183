//! Visibility lifecycle of the dialog
//!
//! ```text
//! Closed --open--> Open --request_close--> Closing --finish_close--> Closed
//!                    ^                        |
//!                    +---------open-----------+
//! ```
//!
//! `Closing` keeps the dialog rendered while the exit transition plays. The
//! host schedules a timer for the returned [`CloseTicket`] and hands the ticket
//! back to [`VisibilityController::finish_close`] when it fires. Reopening
//! during `Closing` bumps the generation so an already-fired timer cannot tear
//! down the fresh dialog.

use std::time::Duration;

/// Length of the exit transition
pub const CLOSE_ANIMATION: Duration = Duration::from_millis(300);

/// Document-level side effects the dialog owns while visible
pub trait PageShell {
  fn lock_scroll(&mut self);
  fn unlock_scroll(&mut self);
  fn attach_escape_listener(&mut self);
  fn detach_escape_listener(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
  #[default]
  Closed,
  Open,
  Closing,
}

/// Proof of a specific close request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket {
  generation: u64,
  delay: Duration,
}

impl CloseTicket {
  /// How long the host waits before calling `finish_close`
  pub fn delay(&self) -> Duration {
    self.delay
  }
}

pub struct VisibilityController<S: PageShell> {
  shell: S,
  phase: Phase,
  generation: u64,
  shell_held: bool,
  close_delay: Duration,
}

impl<S: PageShell> VisibilityController<S> {
  pub fn new(shell: S) -> Self {
    Self::with_close_delay(shell, CLOSE_ANIMATION)
  }

  pub fn with_close_delay(shell: S, close_delay: Duration) -> Self {
    Self {
      shell,
      phase: Phase::Closed,
      generation: 0,
      shell_held: false,
      close_delay,
    }
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// Parent-visible open flag; stays set until the close completes
  pub fn is_open(&self) -> bool {
    self.phase != Phase::Closed
  }

  pub fn is_closing(&self) -> bool {
    self.phase == Phase::Closing
  }

  pub fn is_rendered(&self) -> bool {
    self.is_open() || self.is_closing()
  }

  pub fn shell(&self) -> &S {
    &self.shell
  }

  pub fn shell_mut(&mut self) -> &mut S {
    &mut self.shell
  }

  /// Show the dialog. Returns true when a pending close was cancelled.
  pub fn open(&mut self) -> bool {
    let cancelled = match self.phase {
      Phase::Closing => {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "dialog reopened during close");
        true
      }
      Phase::Closed | Phase::Open => false,
    };
    self.phase = Phase::Open;
    self.acquire_shell();
    cancelled
  }

  /// Start the exit transition. `None` unless the dialog is fully open.
  pub fn request_close(&mut self) -> Option<CloseTicket> {
    if self.phase != Phase::Open {
      return None;
    }
    self.phase = Phase::Closing;
    self.generation += 1;
    tracing::debug!(generation = self.generation, "dialog closing");
    Some(CloseTicket {
      generation: self.generation,
      delay: self.close_delay,
    })
  }

  /// Complete a close once its timer fires. Stale tickets are ignored.
  pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
    if self.phase != Phase::Closing || ticket.generation != self.generation {
      tracing::debug!(
        ticket = ticket.generation,
        current = self.generation,
        "ignoring stale close timer"
      );
      return false;
    }
    self.phase = Phase::Closed;
    self.release_shell();
    tracing::debug!(generation = self.generation, "dialog closed");
    true
  }

  fn acquire_shell(&mut self) {
    if !self.shell_held {
      self.shell.lock_scroll();
      self.shell.attach_escape_listener();
      self.shell_held = true;
    }
  }

  fn release_shell(&mut self) {
    if self.shell_held {
      self.shell.detach_escape_listener();
      self.shell.unlock_scroll();
      self.shell_held = false;
    }
  }
}

impl<S: PageShell> Drop for VisibilityController<S> {
  fn drop(&mut self) {
    self.release_shell();
  }
}
