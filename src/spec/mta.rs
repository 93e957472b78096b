//! PacketCable MTA object identifier names (spec.md §9 supplemental: MTA tag space).
//!
//! The ASN.1 subsystem (spec.md §4.7) decodes PacketCable provisioning files structurally
//! regardless of whether this table recognizes anything; this table only attaches a human name
//! to the small set of well-known MIB object identifiers an enricher can usefully label, and is
//! consulted only when [`crate::options::Options::include_mta_specs`] is set.

/// A recognized PacketCable MIB object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MtaOidEntry {
    pub oid: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static OIDS: &[MtaOidEntry] = &[
    MtaOidEntry {
        oid: "1.3.6.1.4.1.4491.2.2.1.1.1",
        name: "pktcMtaDevProvisioningEnabled",
        description: "enables or disables MTA device provisioning",
    },
    MtaOidEntry {
        oid: "1.3.6.1.4.1.4491.2.2.1.1.2",
        name: "pktcMtaDevSwCurrentVers",
        description: "currently running MTA software version",
    },
    MtaOidEntry {
        oid: "1.3.6.1.4.1.4491.2.2.1.1.3",
        name: "pktcMtaDevSwServer",
        description: "server address to fetch the MTA firmware image from",
    },
    MtaOidEntry {
        oid: "1.3.6.1.4.1.4491.2.2.1.1.4",
        name: "pktcMtaDevRealmOrgName",
        description: "Kerberos realm organization name used for MTA provisioning",
    },
];

pub(super) fn lookup_oid(oid: &str) -> Option<&'static MtaOidEntry> {
    OIDS.iter().find(|entry| entry.oid == oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_oid_resolves() {
        let entry = lookup_oid("1.3.6.1.4.1.4491.2.2.1.1.1").unwrap();
        assert_eq!(entry.name, "pktcMtaDevProvisioningEnabled");
    }

    #[test]
    fn unknown_oid_is_none() {
        assert!(lookup_oid("1.2.3.4").is_none());
    }
}
