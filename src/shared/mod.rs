//! Canonical record types
//!
//! Callers program against these; the dispatcher converts them to and from
//! the wire types of whichever version a call is made on.

#[rustfmt::skip]
mod generated;

pub use generated::*;

impl Operation {
    /// Messages of every error in the payload, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.error
            .as_ref()
            .map(|e| e.errors.iter().map(|err| err.message.clone()).collect())
            .unwrap_or_default()
    }

    pub fn is_done(&self) -> bool {
        self.status == "DONE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{beta, v1};
    use crate::convert::convert_to;

    fn manager() -> InstanceGroupManager {
        InstanceGroupManager {
            name: "web".to_string(),
            zone: "us-central1-a".to_string(),
            base_instance_name: "web".to_string(),
            target_size: 3,
            named_ports: vec![
                NamedPort {
                    name: "http".to_string(),
                    port: 80,
                },
                NamedPort {
                    name: "https".to_string(),
                    port: 443,
                },
            ],
            auto_healing_policies: vec![InstanceGroupManagerAutoHealingPolicy {
                health_check: "hc".to_string(),
                initial_delay_sec: 300,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_through_beta_is_lossless() {
        let original = manager();
        let wire: beta::InstanceGroupManager = convert_to(&original);
        let back: InstanceGroupManager = convert_to(&wire);
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_through_v1_drops_beta_only_fields() {
        let original = manager();
        let back = InstanceGroupManager::from_production(&original.to_production());

        assert!(back.auto_healing_policies.is_empty());
        assert_eq!(
            back,
            InstanceGroupManager {
                auto_healing_policies: vec![],
                ..original
            }
        );
    }

    #[test]
    fn test_address_ip_version_is_beta_only() {
        let address = Address {
            name: "lb".to_string(),
            ip_version: "IPV6".to_string(),
            address_type: "EXTERNAL".to_string(),
            ..Default::default()
        };
        let v1: v1::Address = convert_to(&address);
        let back: Address = convert_to(&v1);
        assert_eq!(back.name, "lb");
        assert!(back.ip_version.is_empty());
        assert!(back.address_type.is_empty());

        let beta: beta::Address = convert_to(&address);
        assert_eq!(beta.ip_version, "IPV6");
    }

    #[test]
    fn test_absent_nested_record_stays_absent() {
        let wire = v1::Operation {
            name: "op".to_string(),
            status: "RUNNING".to_string(),
            ..Default::default()
        };
        let op = Operation::from_production(&wire);
        assert!(op.error.is_none());
        assert!(op.error_messages().is_empty());
        assert!(!op.is_done());
    }

    #[test]
    fn test_array_helpers_keep_order() {
        let ports = vec![
            NamedPort {
                name: "a".to_string(),
                port: 1,
            },
            NamedPort {
                name: "b".to_string(),
                port: 2,
            },
        ];
        let wire = named_port_array_to_production(&ports);
        assert_eq!(wire.iter().map(|p| p.port).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(named_port_array_from_production(&wire), ports);
        assert!(named_port_array_to_production(&[]).is_empty());
    }

    #[test]
    fn test_operation_errors_survive_conversion() {
        let wire = beta::Operation {
            status: "DONE".to_string(),
            error: Some(beta::OperationError {
                errors: vec![beta::OperationErrorErrors {
                    code: "RESOURCE_IN_USE".to_string(),
                    message: "in use".to_string(),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };
        let op: Operation = convert_to(&wire);
        assert!(op.is_done());
        assert_eq!(op.error_messages(), vec!["in use".to_string()]);
    }
}
