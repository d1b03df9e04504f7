//! Static reference data: namespaces, plans and type enumerations
//!
//! The catalog is read-only once built. Mutations resolve namespace and plan
//! names against it; catalog queries list it.

use std::collections::BTreeMap;

use consolemock_core::{
    AddressPlan, AddressPlanSpec, AddressSpacePlan, AddressSpacePlanSpec, AddressSpaceType,
    AddressType, CatalogMeta, Error, Namespace, NamespaceStatus, Result, PHASE_ACTIVE,
};

/// Prefix shared by the names of address plans usable in brokered spaces
const BROKERED_PLAN_PREFIX: &str = "brokered-";

/// Namespaces, address plans and address space plans
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    namespaces: Vec<Namespace>,
    address_plans: Vec<AddressPlan>,
    address_space_plans: Vec<AddressSpacePlan>,
}

impl Catalog {
    /// Build a catalog from explicit entries
    pub fn new(
        namespaces: Vec<Namespace>,
        address_plans: Vec<AddressPlan>,
        address_space_plans: Vec<AddressSpacePlan>,
    ) -> Self {
        Catalog {
            namespaces,
            address_plans,
            address_space_plans,
        }
    }

    /// The fixture catalog the mock server starts with
    pub fn standard() -> Self {
        let namespaces = ["app1_ns", "app2_ns"].into_iter().map(namespace).collect();

        let address_plans = vec![
            address_plan(
                "standard-small-queue",
                AddressType::Queue,
                "Small Queue",
                0,
                "Creates a small queue sharing underlying broker with other queues.",
                "Creates a small queue sharing underlying broker with other queues.",
                &[("broker", 0.01), ("router", 0.001)],
            ),
            address_plan(
                "standard-medium-queue",
                AddressType::Queue,
                "Medium Queue",
                1,
                "Creates a medium sized queue sharing underlying broker with other queues.",
                "Creates a medium sized queue sharing underlying broker with other queues.",
                &[("broker", 0.1), ("router", 0.01)],
            ),
            address_plan(
                "standard-small-anycast",
                AddressType::Anycast,
                "Small Anycast",
                0,
                "Creates a small anycast address.",
                "Creates a small anycast address where messages go via a router that does not take ownership of the messages.",
                &[("router", 0.001)],
            ),
            address_plan(
                "standard-small-multicast",
                AddressType::Multicast,
                "Small Multicast",
                0,
                "Creates a small multicast address.",
                "Creates a small multicast address where messages go via a router that does not take ownership of the messages.",
                &[("router", 0.001)],
            ),
            address_plan(
                "brokered-queue",
                AddressType::Queue,
                "Brokered Queue",
                0,
                "Creates a queue on a broker.",
                "Creates a queue on a broker.",
                &[("broker", 0.0)],
            ),
            address_plan(
                "brokered-topic",
                AddressType::Topic,
                "Brokered Topic",
                0,
                "Creates a topic on a broker.",
                "Creates a topic on a broker.",
                &[("broker", 0.0)],
            ),
        ];

        let standard_plans: Vec<AddressPlan> = address_plans
            .iter()
            .filter(|p| !p.metadata.name.starts_with(BROKERED_PLAN_PREFIX))
            .cloned()
            .collect();
        let brokered_plans: Vec<AddressPlan> = address_plans
            .iter()
            .filter(|p| p.metadata.name.starts_with(BROKERED_PLAN_PREFIX))
            .cloned()
            .collect();

        let address_space_plans = vec![
            address_space_plan(
                "standard-small",
                AddressSpaceType::Standard,
                standard_plans.clone(),
                "Small",
                0,
                "Messaging infrastructure based on Apache Qpid Dispatch Router and Apache ActiveMQ Artemis",
                "Messaging infrastructure based on Apache Qpid Dispatch Router and Apache ActiveMQ Artemis. This plan allows up to 1 router and 1 broker in total, and is suitable for small applications using small address plans and few addresses.",
                &[("aggregate", 2.0), ("broker", 1.0), ("router", 1.0)],
            ),
            address_space_plan(
                "standard-medium",
                AddressSpaceType::Standard,
                standard_plans,
                "Medium",
                1,
                "Messaging infrastructure based on Apache Qpid Dispatch Router and Apache ActiveMQ Artemis",
                "Messaging infrastructure based on Apache Qpid Dispatch Router and Apache ActiveMQ Artemis. This plan allows up to 3 routers and 3 broker in total, and is suitable for applications using small address plans and few addresses.",
                &[("aggregate", 2.0), ("broker", 3.0), ("router", 3.0)],
            ),
            address_space_plan(
                "brokered-single-broker",
                AddressSpaceType::Brokered,
                brokered_plans,
                "Single Broker",
                0,
                "Single Broker instance",
                "Single Broker plan where you can create an infinite number of queues until the system falls over.",
                &[("broker", 1.9)],
            ),
        ];

        Catalog::new(namespaces, address_plans, address_space_plans)
    }

    /// Every namespace, in catalog order
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Look up a namespace by name
    pub fn find_namespace(&self, name: &str) -> Result<&Namespace> {
        self.namespaces
            .iter()
            .find(|n| n.metadata.name == name)
            .ok_or_else(|| {
                Error::unrecognised(
                    "namespace",
                    name,
                    self.namespaces.iter().map(|n| &n.metadata.name),
                )
            })
    }

    /// Look up an address space plan by name
    pub fn find_address_space_plan(&self, name: &str) -> Result<&AddressSpacePlan> {
        self.address_space_plans
            .iter()
            .find(|p| p.metadata.name == name)
            .ok_or_else(|| {
                Error::unrecognised(
                    "address space plan",
                    name,
                    self.address_space_plans.iter().map(|p| &p.metadata.name),
                )
            })
    }

    /// Look up an address plan by name
    pub fn find_address_plan(&self, name: &str) -> Result<&AddressPlan> {
        self.address_plans
            .iter()
            .find(|p| p.metadata.name == name)
            .ok_or_else(|| {
                Error::unrecognised(
                    "address plan",
                    name,
                    self.address_plans.iter().map(|p| &p.metadata.name),
                )
            })
    }

    /// Address space plans, optionally restricted to one type, by display order
    pub fn address_space_plans(&self, kind: Option<AddressSpaceType>) -> Vec<AddressSpacePlan> {
        let mut plans: Vec<AddressSpacePlan> = self
            .address_space_plans
            .iter()
            .filter(|p| kind.map_or(true, |k| p.spec.address_space_type == k))
            .cloned()
            .collect();
        plans.sort_by_key(|p| p.spec.display_order);
        plans
    }

    /// Address plans, optionally only those eligible in one address space
    /// plan, by display order
    pub fn address_plans(&self, address_space_plan: Option<&str>) -> Result<Vec<AddressPlan>> {
        let mut plans = match address_space_plan {
            None => self.address_plans.clone(),
            Some(name) => self.find_address_space_plan(name)?.spec.address_plans.clone(),
        };
        plans.sort_by_key(|p| p.spec.display_order);
        Ok(plans)
    }

    /// Every address type
    pub fn address_types() -> Vec<AddressType> {
        AddressType::ALL.to_vec()
    }

    /// Every address space type
    pub fn address_space_types() -> Vec<AddressSpaceType> {
        AddressSpaceType::ALL.to_vec()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn namespace(name: &str) -> Namespace {
    Namespace {
        metadata: CatalogMeta {
            name: name.to_string(),
        },
        status: NamespaceStatus {
            phase: PHASE_ACTIVE.to_string(),
        },
    }
}

fn resource_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn address_plan(
    name: &str,
    address_type: AddressType,
    display_name: &str,
    display_order: u32,
    short_description: &str,
    long_description: &str,
    resources: &[(&str, f64)],
) -> AddressPlan {
    AddressPlan {
        metadata: CatalogMeta {
            name: name.to_string(),
        },
        spec: AddressPlanSpec {
            address_type,
            display_name: display_name.to_string(),
            display_order,
            short_description: short_description.to_string(),
            long_description: long_description.to_string(),
            resources: resource_map(resources),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn address_space_plan(
    name: &str,
    address_space_type: AddressSpaceType,
    address_plans: Vec<AddressPlan>,
    display_name: &str,
    display_order: u32,
    short_description: &str,
    long_description: &str,
    resource_limits: &[(&str, f64)],
) -> AddressSpacePlan {
    AddressSpacePlan {
        metadata: CatalogMeta {
            name: name.to_string(),
        },
        spec: AddressSpacePlanSpec {
            address_space_type,
            address_plans,
            display_name: display_name.to_string(),
            display_order,
            short_description: short_description.to_string(),
            long_description: long_description.to_string(),
            resource_limits: resource_map(resource_limits),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| name(i).to_string()).collect()
    }

    #[test]
    fn test_find_namespace() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.find_namespace("app2_ns").unwrap().status.phase, "Active");
        let err = catalog.find_namespace("app3_ns").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("app1_ns, app2_ns"));
    }

    #[test]
    fn test_find_plans() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog
                .find_address_space_plan("standard-medium")
                .unwrap()
                .spec
                .display_name,
            "Medium"
        );
        assert_eq!(
            catalog.find_address_plan("brokered-topic").unwrap().spec.address_type,
            AddressType::Topic
        );
        assert!(catalog.find_address_space_plan("premium").unwrap_err().is_not_found());
        assert!(catalog.find_address_plan("premium").unwrap_err().is_not_found());
    }

    #[test]
    fn test_brokered_space_plans() {
        let plans = Catalog::standard().address_space_plans(Some(AddressSpaceType::Brokered));
        assert_eq!(names(&plans, |p| &p.metadata.name), ["brokered-single-broker"]);
    }

    #[test]
    fn test_space_plans_sorted_by_display_order() {
        let plans = Catalog::standard().address_space_plans(None);
        assert_eq!(plans.len(), 3);
        assert!(plans
            .windows(2)
            .all(|w| w[0].spec.display_order <= w[1].spec.display_order));
    }

    #[test]
    fn test_eligible_address_plans() {
        let catalog = Catalog::standard();
        let brokered = catalog.address_plans(Some("brokered-single-broker")).unwrap();
        assert_eq!(
            names(&brokered, |p| &p.metadata.name),
            ["brokered-queue", "brokered-topic"]
        );

        let standard = catalog.address_plans(Some("standard-small")).unwrap();
        assert_eq!(standard.len(), 4);
        assert!(standard
            .iter()
            .all(|p| !p.metadata.name.starts_with(BROKERED_PLAN_PREFIX)));

        assert_eq!(catalog.address_plans(None).unwrap().len(), 6);
        assert!(catalog.address_plans(Some("nope")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_type_enumerations() {
        assert_eq!(Catalog::address_types().len(), 5);
        assert_eq!(
            Catalog::address_space_types(),
            vec![AddressSpaceType::Standard, AddressSpaceType::Brokered]
        );
    }
}
