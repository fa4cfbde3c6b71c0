//! Voice assistant session status.
//!
//! Only the token handshake is modelled here; the realtime audio session that
//! would consume the signed URL is not part of the storefront.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

/// Where the voice session is in its handshake.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VoiceStatus {
    #[default]
    Idle,
    Requesting,
    Ready {
        signed_url: String,
    },
    Unavailable {
        message: String,
    },
}

/// Voice modal state.
///
/// Each request carries a generation number so a token that arrives after the
/// modal was reset is ignored.
#[derive(Clone, Debug, Default)]
pub struct VoiceState {
    pub status: VoiceStatus,
    generation: u64,
}

impl VoiceState {
    /// Enter `Requesting` and return the ticket the response must present.
    /// Returns `None` if a request is already running.
    pub fn begin_request(&mut self) -> Option<u64> {
        if self.status == VoiceStatus::Requesting {
            return None;
        }
        self.generation += 1;
        self.status = VoiceStatus::Requesting;
        Some(self.generation)
    }

    /// Apply a token result. Stale tickets are ignored.
    pub fn resolve(&mut self, ticket: u64, result: Result<String, String>) -> bool {
        if ticket != self.generation || self.status != VoiceStatus::Requesting {
            return false;
        }
        self.status = match result {
            Ok(signed_url) => VoiceStatus::Ready { signed_url },
            Err(message) => VoiceStatus::Unavailable { message },
        };
        true
    }

    /// Back to `Idle`, invalidating any pending request.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = VoiceStatus::Idle;
    }

    #[must_use]
    pub fn is_requesting(&self) -> bool {
        self.status == VoiceStatus::Requesting
    }

    /// Short line shown under the mic button.
    #[must_use]
    pub fn caption(&self) -> &str {
        match &self.status {
            VoiceStatus::Idle => "Tap the mic to start speaking",
            VoiceStatus::Requesting => "Connecting…",
            VoiceStatus::Ready { .. } => "Connected. Go ahead and ask about any shoe.",
            VoiceStatus::Unavailable { message } => message,
        }
    }
}
