//! Terraform data sources exposed by the NSX-T provider
//!
//! Every entry becomes a `get` function token in the default module, e.g.
//! `nsxt_policy_vm` -> `nsxt:index/getPolicyVm:getPolicyVm`.

/// Data source identifiers, in descriptor order
pub const DATA_SOURCES: &[&str] = &[
    // =========================================================================
    // Manager Mode
    // =========================================================================
    "nsxt_provider_info",
    "nsxt_transport_zone",
    "nsxt_switching_profile",
    "nsxt_logical_tier0_router",
    "nsxt_logical_tier1_router",
    "nsxt_mac_pool",
    "nsxt_ns_group",
    "nsxt_ns_groups",
    "nsxt_ns_service",
    "nsxt_ns_services",
    "nsxt_edge_cluster",
    "nsxt_certificate",
    "nsxt_ip_pool",
    "nsxt_firewall_section",
    "nsxt_management_cluster",

    // =========================================================================
    // Policy Infrastructure
    // =========================================================================
    "nsxt_policy_edge_cluster",
    "nsxt_policy_edge_node",
    "nsxt_policy_tier0_gateway",
    "nsxt_policy_tier1_gateway",
    "nsxt_policy_service",
    "nsxt_policy_realization_info",
    "nsxt_policy_segment_realization",
    "nsxt_policy_transport_zone",

    // =========================================================================
    // Policy Profiles
    // =========================================================================
    "nsxt_policy_ip_discovery_profile",
    "nsxt_policy_spoofguard_profile",
    "nsxt_policy_qos_profile",
    "nsxt_policy_ipv6_ndra_profile",
    "nsxt_policy_ipv6_dad_profile",
    "nsxt_policy_gateway_qos_profile",
    "nsxt_policy_segment_security_profile",
    "nsxt_policy_mac_discovery_profile",

    // =========================================================================
    // Policy Inventory and Load Balancer
    // =========================================================================
    "nsxt_policy_vm",
    "nsxt_policy_vms",
    "nsxt_policy_lb_app_profile",
    "nsxt_policy_lb_client_ssl_profile",
    "nsxt_policy_lb_server_ssl_profile",
    "nsxt_policy_lb_monitor",
    "nsxt_policy_certificate",
    "nsxt_policy_lb_persistence_profile",

    // =========================================================================
    // Policy Networking and Security
    // =========================================================================
    "nsxt_policy_vni_pool",
    "nsxt_policy_ip_block",
    "nsxt_policy_ip_pool",
    "nsxt_policy_site",
    "nsxt_policy_gateway_policy",
    "nsxt_policy_security_policy",
    "nsxt_policy_group",
    "nsxt_policy_context_profile",
    "nsxt_policy_dhcp_server",
    "nsxt_policy_bfd_profile",
    "nsxt_policy_intrusion_service_profile",
    "nsxt_policy_lb_service",
    "nsxt_policy_gateway_locale_service",
    "nsxt_policy_bridge_profile",
    "nsxt_policy_ipsec_vpn_local_endpoint",
    "nsxt_policy_ipsec_vpn_service",
    "nsxt_policy_l2_vpn_service",
    "nsxt_policy_segment",
    "nsxt_policy_project",
    "nsxt_policy_gateway_prefix_list",
    "nsxt_policy_gateway_route_map",

    // =========================================================================
    // Fabric
    // =========================================================================
    "nsxt_uplink_host_switch_profile",
    "nsxt_compute_manager",
    "nsxt_transport_node_realization",
    "nsxt_failure_domain",
    "nsxt_compute_collection",
];
