//! Feed session: the impure shell around the controller.
//!
//! The session owns the provider and the channels, and is the only place
//! fetch replies and interaction commands cross back into the controller's
//! mutation context. Everything it does is a thin relay; all decisions live
//! in [`FeedController`].

use crate::feed::controller::FeedController;
use crate::feed::events::FeedCommand;
use crate::feed::index::FeedIndex;
use crate::feed::state::FeedState;
use crate::model::{FeedError, ReviewId};
use crate::parser;
use crate::provider::{PageReply, ReviewsProvider};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// Drives one feed against one provider.
///
/// Single-threaded by construction: the owner context calls
/// [`poll`](Self::poll) from its run loop, and every mutation happens
/// inside that call. Provider threads and interaction sources only ever
/// touch channels.
pub struct FeedSession {
    controller: FeedController,
    provider: Box<dyn ReviewsProvider>,
    reply_tx: Sender<PageReply>,
    reply_rx: Receiver<PageReply>,
    command_tx: Sender<FeedCommand>,
    command_rx: Receiver<FeedCommand>,
}

impl FeedSession {
    /// Create a session around an existing controller.
    pub fn new(controller: FeedController, provider: Box<dyn ReviewsProvider>) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel();
        Self {
            controller,
            provider,
            reply_tx,
            reply_rx,
            command_tx,
            command_rx,
        }
    }

    /// Current pagination state.
    pub fn state(&self) -> &FeedState {
        self.controller.state()
    }

    /// Current descriptor index.
    pub fn index(&self) -> &FeedIndex {
        self.controller.index()
    }

    /// The controller behind this session.
    pub fn controller_mut(&mut self) -> &mut FeedController {
        &mut self.controller
    }

    /// Sender for interaction sources. Clones freely; commands are applied
    /// on the next [`poll`](Self::poll).
    pub fn command_sender(&self) -> Sender<FeedCommand> {
        self.command_tx.clone()
    }

    /// Ask the controller for the next page and, if one is due, dispatch it
    /// to the provider. Returns whether a fetch was issued.
    pub fn request_next_page(&mut self) -> bool {
        match self.controller.request_next_page() {
            Some(request) => {
                self.provider.fetch_page(request, self.reply_tx.clone());
                true
            }
            None => false,
        }
    }

    /// Re-issue the next page request. Same gating as
    /// [`request_next_page`](Self::request_next_page).
    pub fn refresh(&mut self) -> bool {
        self.request_next_page()
    }

    /// Drain pending commands and fetch replies, applying each in arrival
    /// order. Non-blocking. Returns the errors encountered so the caller
    /// can surface them; the feed itself is already back in a retryable
    /// state when this returns.
    pub fn poll(&mut self) -> Vec<FeedError> {
        let mut errors = Vec::new();

        // Commands first so an expand issued before a page landed is
        // applied against the entries the user actually saw.
        let commands: Vec<FeedCommand> = self.command_rx.try_iter().collect();
        for command in commands {
            if let Some(request) = self.controller.handle_command(command) {
                self.provider.fetch_page(request, self.reply_tx.clone());
            }
        }

        while let Ok((request, outcome)) = self.reply_rx.try_recv() {
            debug!(offset = request.offset, ok = outcome.is_ok(), "applying page reply");
            let decoded = outcome
                .map_err(FeedError::from)
                .and_then(|bytes| parser::decode_page(&bytes).map_err(FeedError::from));
            if let Err(error) = self.controller.apply_page_result(decoded) {
                errors.push(error);
            }
        }

        errors
    }

    /// Lift the line limit on one entry, immediately.
    pub fn expand(&mut self, id: ReviewId) {
        self.controller.expand(id);
    }
}

impl std::fmt::Debug for FeedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSession")
            .field("controller", &self.controller)
            .finish()
    }
}
