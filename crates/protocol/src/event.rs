//! Event registry for the capture path
//!
//! Every instrumentable event has a stable small integer id and a human
//! name. The id combined with the category tag forms the wire-level type id
//! written into the shared buffer, letting a consumer demultiplex records
//! without parsing payloads.

/// Category tag carried in the high 16 bits of the wire type id
///
/// Only driver events are captured here; the tag keeps the wire id
/// partitioned so further categories can join without renumbering ids.
///
/// NOTE: tag values are on the wire and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EventCategory {
    /// Media-driver events (frame I/O, control, resource teardown)
    Driver = 0,
}

impl EventCategory {
    /// Wire tag value for this category
    #[inline]
    pub const fn tag(self) -> u16 {
        self as u16
    }

    /// Get the string name of this category
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of instrumentable event kinds
///
/// Ids are stable across the process lifetime and on the wire; gaps are
/// reserved for events this core does not capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EventKind {
    /// Default value (should not be used in practice)
    Unknown = 0,
    /// Inbound network frame
    FrameIn = 1,
    /// Outbound network frame
    FrameOut = 2,
    /// Control request received from a client
    CommandIn = 3,
    /// Control response sent to a client
    CommandOut = 4,
    /// Publication torn down and its resources reclaimed
    RemovePublicationCleanup = 7,
    /// Subscription torn down and its resources reclaimed
    RemoveSubscriptionCleanup = 8,
    /// Image torn down and its resources reclaimed
    RemoveImageCleanup = 9,
    /// Untethered subscription moved between states
    UntetheredSubscriptionStateChange = 23,
}

/// All capturable kinds, excluding `Unknown`
pub const ALL_EVENT_KINDS: &[EventKind] = &[
    EventKind::FrameIn,
    EventKind::FrameOut,
    EventKind::CommandIn,
    EventKind::CommandOut,
    EventKind::RemovePublicationCleanup,
    EventKind::RemoveSubscriptionCleanup,
    EventKind::RemoveImageCleanup,
    EventKind::UntetheredSubscriptionStateChange,
];

impl EventKind {
    /// Parse an event kind from its raw id
    #[inline]
    pub const fn from_u16(value: u16) -> Self {
        match value {
            1 => Self::FrameIn,
            2 => Self::FrameOut,
            3 => Self::CommandIn,
            4 => Self::CommandOut,
            7 => Self::RemovePublicationCleanup,
            8 => Self::RemoveSubscriptionCleanup,
            9 => Self::RemoveImageCleanup,
            23 => Self::UntetheredSubscriptionStateChange,
            _ => Self::Unknown,
        }
    }

    /// Raw id of this kind
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Category this kind belongs to
    #[inline]
    pub const fn category(self) -> EventCategory {
        EventCategory::Driver
    }

    /// Wire-level type id: `category_tag << 16 | id & 0xFFFF`
    #[inline]
    pub const fn type_id(self) -> i32 {
        ((self.category().tag() as i32) << 16) | (self.as_u16() & 0xFFFF) as i32
    }

    /// Get the string name of this kind
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::FrameIn => "frame_in",
            Self::FrameOut => "frame_out",
            Self::CommandIn => "command_in",
            Self::CommandOut => "command_out",
            Self::RemovePublicationCleanup => "remove_publication_cleanup",
            Self::RemoveSubscriptionCleanup => "remove_subscription_cleanup",
            Self::RemoveImageCleanup => "remove_image_cleanup",
            Self::UntetheredSubscriptionStateChange => "untethered_subscription_state_change",
        }
    }

    /// Resolve a kind from its configuration name
    ///
    /// Returns `None` for names outside the registry; `"unknown"` is not a
    /// capturable kind and also resolves to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_EVENT_KINDS.iter().copied().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
