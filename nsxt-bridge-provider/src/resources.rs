//! Terraform resources exposed by the NSX-T provider
//!
//! Every entry becomes a resource token in the default module, e.g.
//! `nsxt_logical_switch` -> `nsxt:index/logicalSwitch:LogicalSwitch`.

/// Resource identifiers, in descriptor order
pub const RESOURCES: &[&str] = &[
    // =========================================================================
    // DHCP
    // =========================================================================
    "nsxt_dhcp_relay_profile",
    "nsxt_dhcp_relay_service",
    "nsxt_dhcp_server_profile",
    "nsxt_logical_dhcp_server",
    "nsxt_dhcp_server_ip_pool",

    // =========================================================================
    // Logical Switching and Routing
    // =========================================================================
    "nsxt_logical_switch",
    "nsxt_vlan_logical_switch",
    "nsxt_logical_dhcp_port",
    "nsxt_logical_port",
    "nsxt_logical_tier0_router",
    "nsxt_logical_tier1_router",
    "nsxt_logical_router_centralized_service_port",
    "nsxt_logical_router_downlink_port",
    "nsxt_logical_router_link_port_on_tier0",
    "nsxt_logical_router_link_port_on_tier1",

    // =========================================================================
    // Switching Profiles
    // =========================================================================
    "nsxt_ip_discovery_switching_profile",
    "nsxt_mac_management_switching_profile",
    "nsxt_qos_switching_profile",
    "nsxt_spoofguard_switching_profile",
    "nsxt_switch_security_switching_profile",

    // =========================================================================
    // NS Services and Groups
    // =========================================================================
    "nsxt_l4_port_set_ns_service",
    "nsxt_algorithm_type_ns_service",
    "nsxt_icmp_type_ns_service",
    "nsxt_igmp_type_ns_service",
    "nsxt_ether_type_ns_service",
    "nsxt_ip_protocol_ns_service",
    "nsxt_ns_service_group",
    "nsxt_ns_group",

    // =========================================================================
    // Firewall, NAT and IPAM
    // =========================================================================
    "nsxt_firewall_section",
    "nsxt_nat_rule",
    "nsxt_ip_block",
    "nsxt_ip_block_subnet",
    "nsxt_ip_pool",
    "nsxt_ip_pool_allocation_ip_address",
    "nsxt_ip_set",
    "nsxt_static_route",
    "nsxt_vm_tags",

    // =========================================================================
    // Load Balancer
    // =========================================================================
    "nsxt_lb_icmp_monitor",
    "nsxt_lb_tcp_monitor",
    "nsxt_lb_udp_monitor",
    "nsxt_lb_http_monitor",
    "nsxt_lb_https_monitor",
    "nsxt_lb_passive_monitor",
    "nsxt_lb_pool",
    "nsxt_lb_tcp_virtual_server",
    "nsxt_lb_udp_virtual_server",
    "nsxt_lb_http_virtual_server",
    "nsxt_lb_http_forwarding_rule",
    "nsxt_lb_http_request_rewrite_rule",
    "nsxt_lb_http_response_rewrite_rule",
    "nsxt_lb_cookie_persistence_profile",
    "nsxt_lb_source_ip_persistence_profile",
    "nsxt_lb_client_ssl_profile",
    "nsxt_lb_server_ssl_profile",
    "nsxt_lb_service",
    "nsxt_lb_fast_tcp_application_profile",
    "nsxt_lb_fast_udp_application_profile",
    "nsxt_lb_http_application_profile",

    // =========================================================================
    // Policy Gateways
    // =========================================================================
    "nsxt_policy_tier1_gateway",
    "nsxt_policy_tier1_gateway_interface",
    "nsxt_policy_tier0_gateway",
    "nsxt_policy_tier0_gateway_interface",
    "nsxt_policy_tier0_gateway_ha_vip_config",

    // =========================================================================
    // Policy Security and Services
    // =========================================================================
    "nsxt_policy_group",
    "nsxt_policy_domain",
    "nsxt_policy_security_policy",
    "nsxt_policy_service",
    "nsxt_policy_gateway_policy",
    "nsxt_policy_predefined_gateway_policy",
    "nsxt_policy_predefined_security_policy",

    // =========================================================================
    // Policy Segments and Routing
    // =========================================================================
    "nsxt_policy_segment",
    "nsxt_policy_vlan_segment",
    "nsxt_policy_fixed_segment",
    "nsxt_policy_static_route",
    "nsxt_policy_gateway_prefix_list",
    "nsxt_policy_vm_tags",
    "nsxt_policy_nat_rule",

    // =========================================================================
    // Policy IPAM and Load Balancer
    // =========================================================================
    "nsxt_policy_ip_block",
    "nsxt_policy_lb_pool",
    "nsxt_policy_ip_pool",
    "nsxt_policy_ip_pool_block_subnet",
    "nsxt_policy_ip_pool_static_subnet",
    "nsxt_policy_lb_service",
    "nsxt_policy_lb_virtual_server",
    "nsxt_policy_ip_address_allocation",

    // =========================================================================
    // Policy BGP, DHCP and DNS
    // =========================================================================
    "nsxt_policy_bgp_neighbor",
    "nsxt_policy_bgp_config",
    "nsxt_policy_dhcp_relay",
    "nsxt_policy_dhcp_server",
    "nsxt_policy_context_profile",
    "nsxt_policy_dhcp_v4_static_binding",
    "nsxt_policy_dhcp_v6_static_binding",
    "nsxt_policy_dns_forwarder_zone",
    "nsxt_policy_gateway_dns_forwarder",

    // =========================================================================
    // Policy Routing Extensions and IDS
    // =========================================================================
    "nsxt_policy_gateway_community_list",
    "nsxt_policy_gateway_route_map",
    "nsxt_policy_intrusion_service_policy",
    "nsxt_policy_static_route_bfd_peer",
    "nsxt_policy_intrusion_service_profile",

    // =========================================================================
    // Policy EVPN, QoS and OSPF
    // =========================================================================
    "nsxt_policy_evpn_tenant",
    "nsxt_policy_evpn_config",
    "nsxt_policy_evpn_tunnel_endpoint",
    "nsxt_policy_vni_pool",
    "nsxt_policy_qos_profile",
    "nsxt_policy_ospf_config",
    "nsxt_policy_ospf_area",
    "nsxt_policy_gateway_redistribution_config",
    "nsxt_policy_mac_discovery_profile",

    // =========================================================================
    // Policy VPN
    // =========================================================================
    "nsxt_policy_ipsec_vpn_ike_profile",
    "nsxt_policy_ipsec_vpn_tunnel_profile",
    "nsxt_policy_ipsec_vpn_dpd_profile",
    "nsxt_policy_ipsec_vpn_session",
    "nsxt_policy_l2_vpn_session",
    "nsxt_policy_ipsec_vpn_service",
    "nsxt_policy_l2_vpn_service",
    "nsxt_policy_ipsec_vpn_local_endpoint",

    // =========================================================================
    // Policy Profiles and Projects
    // =========================================================================
    "nsxt_policy_ip_discovery_profile",
    "nsxt_policy_context_profile_custom_attribute",
    "nsxt_policy_segment_security_profile",
    "nsxt_policy_spoof_guard_profile",
    "nsxt_policy_gateway_qos_profile",
    "nsxt_policy_project",
    "nsxt_policy_transport_zone",

    // =========================================================================
    // Fabric
    // =========================================================================
    "nsxt_edge_cluster",
    "nsxt_compute_manager",
    "nsxt_manager_cluster",
    "nsxt_uplink_host_switch_profile",
    "nsxt_transport_node",
    "nsxt_failure_domain",
    "nsxt_cluster_virtual_ip",
    "nsxt_policy_host_transport_node_profile",
];
