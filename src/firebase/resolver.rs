//! Decide which side of each active firebase pair is open
//!
//! Brigade-contested links open the side on the front line. Every other active
//! link uses a fixed split on the pair's ids, so the same pair always opens
//! the same side.

use serde::Serialize;

use crate::core::types::{FacilityId, NodeId};
use crate::firebase::{FirebaseRegistry, LinkState};

/// Inconsistent firebase data found while resolving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FirebaseViolation {
    /// Link is inactive yet a side is open
    InactiveButOpen { facility: FacilityId, partner: FacilityId },
    /// Both sides of an active pair are open
    BothOpen { facility: FacilityId, partner: FacilityId },
    /// A side references a partner that is not registered
    MissingPartner { facility: FacilityId, partner: FacilityId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirebaseResolution {
    /// Sides opened by this call; sides already open are not listed
    pub opened: Vec<FacilityId>,
    pub violations: Vec<FirebaseViolation>,
}

pub struct FirebasePairResolver;

impl FirebasePairResolver {
    /// Resolve every pair once, from its higher-id side
    ///
    /// `is_frontline` reports whether a chokepoint currently sits on the
    /// front line. Violations are reported and left as found.
    pub fn resolve(
        registry: &mut FirebaseRegistry,
        is_frontline: impl Fn(NodeId) -> bool,
    ) -> FirebaseResolution {
        let mut resolution = FirebaseResolution::default();

        for facility in registry.facilities() {
            let Some(side) = registry.get(facility).cloned() else {
                continue;
            };
            // A missing partner is reported from either side
            let partner = match registry.get(side.partner) {
                Some(partner) if side.partner != facility => partner.clone(),
                _ => {
                    let violation = FirebaseViolation::MissingPartner {
                        facility,
                        partner: side.partner,
                    };
                    tracing::warn!(?violation, "firebase partner missing");
                    resolution.violations.push(violation);
                    continue;
                }
            };
            if facility < partner.facility {
                continue;
            }

            let link = registry.link(facility, partner.facility);
            if !link.is_active() {
                if side.is_open || partner.is_open {
                    let violation = FirebaseViolation::InactiveButOpen {
                        facility,
                        partner: partner.facility,
                    };
                    tracing::warn!(?violation, "open firebase on inactive link");
                    resolution.violations.push(violation);
                }
                continue;
            }

            if side.is_open && partner.is_open {
                let violation = FirebaseViolation::BothOpen {
                    facility,
                    partner: partner.facility,
                };
                tracing::warn!(?violation, "both firebases of a pair are open");
                resolution.violations.push(violation);
                continue;
            }
            if side.is_open || partner.is_open {
                continue;
            }

            let open_partner = match link {
                LinkState::BrigadeContested => {
                    !is_frontline(side.chokepoint) && is_frontline(partner.chokepoint)
                }
                _ => (u64::from(facility.0) + u64::from(partner.facility.0)) % 2 != 0,
            };
            let chosen = if open_partner { partner.facility } else { facility };

            if let Some(opened) = registry.get_mut(chosen) {
                opened.is_open = true;
                tracing::info!(
                    facility = chosen.0,
                    owner = ?opened.owner,
                    ?link,
                    "firebase opened"
                );
            }
            resolution.opened.push(chosen);
        }

        resolution
    }
}
