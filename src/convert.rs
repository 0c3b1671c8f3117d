//! Structural conversion between field-compatible record types
//!
//! The generators emit one `Convert` impl per (canonical type, wire type)
//! pair, made of plain per-field assignments. The blanket impls here carry
//! those impls through optional references and ordered sequences, so a
//! generated impl never has to spell out the recursion itself.

/// Copy every field `Self` shares with `D` into `destination`.
///
/// Implementations are total: a pair of generated types always converts.
pub trait Convert<D> {
    fn convert_into(&self, destination: &mut D);
}

/// Convert `source` into an existing `destination`.
pub fn convert<S, D>(source: &S, destination: &mut D)
where
    S: Convert<D> + ?Sized,
{
    source.convert_into(destination);
}

/// Convert `source` into a freshly defaulted `D`.
pub fn convert_to<D, S>(source: &S) -> D
where
    D: Default,
    S: Convert<D> + ?Sized,
{
    let mut destination = D::default();
    source.convert_into(&mut destination);
    destination
}

/// Absent stays absent; present is converted into a new destination record.
pub fn convert_optional<S, D>(source: &Option<S>) -> Option<D>
where
    S: Convert<D>,
    D: Default,
{
    source.as_ref().map(convert_to)
}

/// Element-wise conversion preserving length and order.
pub fn convert_sequence<S, D>(items: &[S]) -> Vec<D>
where
    S: Convert<D>,
    D: Default,
{
    items.iter().map(convert_to).collect()
}

impl<S, D> Convert<Option<D>> for Option<S>
where
    S: Convert<D>,
    D: Default,
{
    fn convert_into(&self, destination: &mut Option<D>) {
        *destination = convert_optional(self);
    }
}

impl<S, D> Convert<Vec<D>> for Vec<S>
where
    S: Convert<D>,
    D: Default,
{
    fn convert_into(&self, destination: &mut Vec<D>) {
        *destination = convert_sequence(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Port {
        name: String,
        port: i64,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct WirePort {
        name: String,
        port: i64,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Group {
        name: String,
        primary: Option<Port>,
        ports: Vec<Option<Port>>,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct WireGroup {
        name: String,
        primary: Option<WirePort>,
        ports: Vec<Option<WirePort>>,
        // Only exists on the wire side
        fingerprint: String,
    }

    impl Convert<WirePort> for Port {
        fn convert_into(&self, dst: &mut WirePort) {
            dst.name = self.name.clone();
            dst.port = self.port;
        }
    }

    impl Convert<Port> for WirePort {
        fn convert_into(&self, dst: &mut Port) {
            dst.name = self.name.clone();
            dst.port = self.port;
        }
    }

    impl Convert<WireGroup> for Group {
        fn convert_into(&self, dst: &mut WireGroup) {
            dst.name = self.name.clone();
            dst.primary = convert_optional(&self.primary);
            dst.ports = convert_sequence(&self.ports);
        }
    }

    impl Convert<Group> for WireGroup {
        fn convert_into(&self, dst: &mut Group) {
            dst.name = self.name.clone();
            dst.primary = convert_optional(&self.primary);
            dst.ports = convert_sequence(&self.ports);
        }
    }

    fn port(name: &str, port: i64) -> Port {
        Port {
            name: name.to_string(),
            port,
        }
    }

    #[test]
    fn test_absent_reference_stays_absent() {
        let group = Group {
            name: "igm".to_string(),
            ..Default::default()
        };
        let mut wire = WireGroup {
            primary: Some(WirePort::default()),
            ..Default::default()
        };

        convert(&group, &mut wire);

        assert_eq!(wire.name, "igm");
        assert!(wire.primary.is_none(), "stale destination reference must be cleared");
    }

    #[test]
    fn test_present_reference_is_converted() {
        let group = Group {
            primary: Some(port("http", 80)),
            ..Default::default()
        };
        let wire: WireGroup = convert_to(&group);
        assert_eq!(
            wire.primary,
            Some(WirePort {
                name: "http".to_string(),
                port: 80
            })
        );
    }

    #[test]
    fn test_sequence_keeps_order_and_holes() {
        let group = Group {
            ports: vec![Some(port("a", 1)), None, Some(port("c", 3))],
            ..Default::default()
        };
        let wire: WireGroup = convert_to(&group);

        assert_eq!(wire.ports.len(), 3);
        assert_eq!(wire.ports[0].as_ref().map(|p| p.port), Some(1));
        assert!(wire.ports[1].is_none());
        assert_eq!(wire.ports[2].as_ref().map(|p| p.name.as_str()), Some("c"));
    }

    #[test]
    fn test_empty_sequence_is_empty_not_absent() {
        let converted: Vec<WirePort> = convert_sequence::<Port, WirePort>(&[]);
        assert!(converted.is_empty());
    }

    #[test]
    fn test_round_trip_drops_wire_only_fields() {
        let wire = WireGroup {
            name: "igm".to_string(),
            primary: Some(WirePort {
                name: "https".to_string(),
                port: 443,
            }),
            ports: vec![None],
            fingerprint: "abc".to_string(),
        };

        let group: Group = convert_to(&wire);
        let back: WireGroup = convert_to(&group);

        assert_eq!(back.name, wire.name);
        assert_eq!(back.primary, wire.primary);
        assert_eq!(back.ports, wire.ports);
        assert!(back.fingerprint.is_empty());
    }
}
