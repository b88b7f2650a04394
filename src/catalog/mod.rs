//! The Ecomail endpoint catalog.
//!
//! Every remote operation is one [`Endpoint`] variant. Its
//! [`EndpointDescriptor`] says which HTTP method to use, which path template
//! to expand, whether a JSON body is sent and whether extra query
//! parameters are accepted. The call sites on
//! [`EcomailClient`](crate::EcomailClient) only pick the variant and pass
//! the caller's arguments; all requests go through the same dispatch.
//!
//! # Example
//!
//! ```rust
//! use ecomail_api::catalog::{BodyRequirement, Endpoint};
//! use ecomail_api::HttpMethod;
//!
//! let descriptor = Endpoint::AddSubscriber.descriptor();
//! assert_eq!(descriptor.http_method, HttpMethod::Post);
//! assert_eq!(descriptor.template, "lists/{list_id}/subscribe");
//! assert_eq!(descriptor.body, BodyRequirement::Required);
//!
//! let path = descriptor.resolve_path(&["LIST1"]).unwrap();
//! assert_eq!(path, "lists/LIST1/subscribe");
//! ```

mod path;

pub use path::{build_path, encode_segment, placeholders};

use crate::clients::{HttpMethod, InvalidHttpRequestError};

/// Whether an endpoint sends a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRequirement {
    /// No body is sent.
    None,
    /// The caller must supply a body.
    Required,
    /// A body is always sent; `{}` when the caller has no data.
    DefaultEmpty,
}

/// Static description of one remote operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation name, as exposed on the client.
    pub name: &'static str,
    /// The HTTP method for this operation.
    pub http_method: HttpMethod,
    /// Identifier placeholders in template order.
    pub ids: &'static [&'static str],
    /// The path template with `{id}` placeholders.
    pub template: &'static str,
    /// Body handling.
    pub body: BodyRequirement,
    /// Whether call-site query parameters are accepted.
    pub accepts_query: bool,
}

impl EndpointDescriptor {
    /// Creates a new `EndpointDescriptor`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        ids: &'static [&'static str],
        template: &'static str,
        body: BodyRequirement,
    ) -> Self {
        Self {
            name,
            http_method,
            ids,
            template,
            body,
            accepts_query: false,
        }
    }

    /// Marks the descriptor as accepting call-site query parameters.
    #[must_use]
    pub const fn with_query(mut self) -> Self {
        self.accepts_query = true;
        self
    }

    /// Returns the number of identifiers the template needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Expands the template with positional identifier values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::PathArguments`] if the number of
    /// values differs from the number of placeholders.
    pub fn resolve_path(&self, values: &[&str]) -> Result<String, InvalidHttpRequestError> {
        if values.len() != self.ids.len() {
            return Err(InvalidHttpRequestError::PathArguments {
                template: self.template,
                expected: self.ids.len(),
                actual: values.len(),
            });
        }

        let pairs: Vec<(&str, &str)> =
            self.ids.iter().copied().zip(values.iter().copied()).collect();
        Ok(build_path(self.template, &pairs))
    }
}

const fn get(
    name: &'static str,
    ids: &'static [&'static str],
    template: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor::new(name, HttpMethod::Get, ids, template, BodyRequirement::None)
}

const fn post(
    name: &'static str,
    ids: &'static [&'static str],
    template: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor::new(name, HttpMethod::Post, ids, template, BodyRequirement::Required)
}

const fn put(
    name: &'static str,
    ids: &'static [&'static str],
    template: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor::new(name, HttpMethod::Put, ids, template, BodyRequirement::Required)
}

const fn delete(
    name: &'static str,
    ids: &'static [&'static str],
    template: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor::new(name, HttpMethod::Delete, ids, template, BodyRequirement::Required)
}

const fn delete_empty(
    name: &'static str,
    ids: &'static [&'static str],
    template: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor::new(name, HttpMethod::Delete, ids, template, BodyRequirement::DefaultEmpty)
}

const LIST: &[&str] = &["list_id"];
const EMAIL: &[&str] = &["email"];
const CAMPAIGN: &[&str] = &["campaign_id"];
const PIPELINE: &[&str] = &["pipeline_id"];
const TRANSACTION: &[&str] = &["transaction_id"];
const FEED: &[&str] = &["feed_id"];

/// Every operation of the Ecomail API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Endpoint {
    // Lists and subscribers
    ListLists,
    AddList,
    GetList,
    UpdateList,
    GetSubscribers,
    GetSubscriber,
    GetSubscriberByPhone,
    GetListSegments,
    AddSubscriber,
    RemoveSubscriber,
    UpdateSubscriber,
    AddSubscriberBulk,
    GetSubscriberLists,
    GetSubscriberByEmail,
    DeleteSubscriber,
    // Campaigns
    ListCampaigns,
    AddCampaign,
    UpdateCampaign,
    SendCampaign,
    GetCampaignStats,
    GetCampaignStatsDetail,
    GetSegmentStats,
    // Automations
    ListAutomations,
    TriggerAutomation,
    GetPipelineStats,
    GetPipelineStatsDetail,
    GetPipelineStatsForEmails,
    // Templates
    CreateTemplate,
    GetTemplate,
    // Domains
    ListDomains,
    CreateDomain,
    DeleteDomain,
    // Transactional email
    SendTransactionalEmail,
    SendTransactionalTemplate,
    GetTransactionalStats,
    GetTransactionalStatsDoi,
    // Transactions
    CreateTransaction,
    CreateBulkTransactions,
    UpdateTransaction,
    DeleteTransaction,
    DeleteBulkTransactions,
    GetTransactions,
    // Feeds
    RefreshProductFeed,
    RefreshDataFeed,
    // Tracker events, search, coupons
    AddEvent,
    Search,
    ImportCoupons,
    DeleteCoupons,
    // Account webhook
    SetWebhook,
    GetWebhook,
    DeleteWebhook,
}

impl Endpoint {
    /// All endpoints, in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::ListLists,
        Self::AddList,
        Self::GetList,
        Self::UpdateList,
        Self::GetSubscribers,
        Self::GetSubscriber,
        Self::GetSubscriberByPhone,
        Self::GetListSegments,
        Self::AddSubscriber,
        Self::RemoveSubscriber,
        Self::UpdateSubscriber,
        Self::AddSubscriberBulk,
        Self::GetSubscriberLists,
        Self::GetSubscriberByEmail,
        Self::DeleteSubscriber,
        Self::ListCampaigns,
        Self::AddCampaign,
        Self::UpdateCampaign,
        Self::SendCampaign,
        Self::GetCampaignStats,
        Self::GetCampaignStatsDetail,
        Self::GetSegmentStats,
        Self::ListAutomations,
        Self::TriggerAutomation,
        Self::GetPipelineStats,
        Self::GetPipelineStatsDetail,
        Self::GetPipelineStatsForEmails,
        Self::CreateTemplate,
        Self::GetTemplate,
        Self::ListDomains,
        Self::CreateDomain,
        Self::DeleteDomain,
        Self::SendTransactionalEmail,
        Self::SendTransactionalTemplate,
        Self::GetTransactionalStats,
        Self::GetTransactionalStatsDoi,
        Self::CreateTransaction,
        Self::CreateBulkTransactions,
        Self::UpdateTransaction,
        Self::DeleteTransaction,
        Self::DeleteBulkTransactions,
        Self::GetTransactions,
        Self::RefreshProductFeed,
        Self::RefreshDataFeed,
        Self::AddEvent,
        Self::Search,
        Self::ImportCoupons,
        Self::DeleteCoupons,
        Self::SetWebhook,
        Self::GetWebhook,
        Self::DeleteWebhook,
    ];

    /// Returns the static descriptor for this endpoint.
    #[must_use]
    pub const fn descriptor(self) -> EndpointDescriptor {
        match self {
            Self::ListLists => get("list_lists", &[], "lists"),
            Self::AddList => post("add_list", &[], "lists"),
            Self::GetList => get("get_list", LIST, "lists/{list_id}"),
            Self::UpdateList => put("update_list", LIST, "lists/{list_id}"),
            Self::GetSubscribers => get("get_subscribers", LIST, "lists/{list_id}/subscribers"),
            Self::GetSubscriber => get(
                "get_subscriber",
                &["list_id", "email"],
                "lists/{list_id}/subscriber/{email}",
            ),
            Self::GetSubscriberByPhone => get(
                "get_subscriber_by_phone",
                &["list_id", "phone"],
                "lists/{list_id}/subscriber-by-phone/{phone}",
            ),
            Self::GetListSegments => get("get_list_segments", LIST, "lists/{list_id}/segments"),
            Self::AddSubscriber => post("add_subscriber", LIST, "lists/{list_id}/subscribe"),
            Self::RemoveSubscriber => {
                delete("remove_subscriber", LIST, "lists/{list_id}/unsubscribe")
            }
            Self::UpdateSubscriber => {
                put("update_subscriber", LIST, "lists/{list_id}/update-subscriber")
            }
            Self::AddSubscriberBulk => {
                post("add_subscriber_bulk", LIST, "lists/{list_id}/subscribe-bulk")
            }
            Self::GetSubscriberLists => get("get_subscriber_lists", EMAIL, "subscribers/{email}"),
            Self::GetSubscriberByEmail => {
                get("get_subscriber_by_email", EMAIL, "subscribers/{email}")
            }
            Self::DeleteSubscriber => {
                delete_empty("delete_subscriber", EMAIL, "subscribers/{email}/delete")
            }
            Self::ListCampaigns => get("list_campaigns", &[], "campaigns").with_query(),
            Self::AddCampaign => post("add_campaign", &[], "campaigns"),
            Self::UpdateCampaign => put("update_campaign", CAMPAIGN, "campaigns/{campaign_id}"),
            Self::SendCampaign => get("send_campaign", CAMPAIGN, "campaign/{campaign_id}/send"),
            Self::GetCampaignStats => {
                get("get_campaign_stats", CAMPAIGN, "campaigns/{campaign_id}/stats")
            }
            Self::GetCampaignStatsDetail => get(
                "get_campaign_stats_detail",
                CAMPAIGN,
                "campaigns/{campaign_id}/stats-detail",
            )
            .with_query(),
            Self::GetSegmentStats => get(
                "get_segment_stats",
                &["segment_id"],
                "campaigns/segment/{segment_id}/stats",
            ),
            Self::ListAutomations => get("list_automations", &[], "pipelines"),
            Self::TriggerAutomation => {
                post("trigger_automation", PIPELINE, "pipelines/{pipeline_id}/trigger")
            }
            Self::GetPipelineStats => {
                get("get_pipeline_stats", PIPELINE, "pipelines/{pipeline_id}/stats")
            }
            Self::GetPipelineStatsDetail => get(
                "get_pipeline_stats_detail",
                PIPELINE,
                "pipelines/{pipeline_id}/stats-detail",
            )
            .with_query(),
            Self::GetPipelineStatsForEmails => post(
                "get_pipeline_stats_for_emails",
                PIPELINE,
                "pipelines/{pipeline_id}/stats-detail",
            )
            .with_query(),
            Self::CreateTemplate => post("create_template", &[], "template"),
            Self::GetTemplate => get("get_template", &["template_id"], "template/{template_id}"),
            Self::ListDomains => get("list_domains", &[], "domains"),
            Self::CreateDomain => post("create_domain", &[], "domains"),
            Self::DeleteDomain => {
                delete_empty("delete_domain", &["domain_id"], "domains/{domain_id}")
            }
            Self::SendTransactionalEmail => {
                post("send_transactional_email", &[], "transactional/send-message")
            }
            Self::SendTransactionalTemplate => {
                post("send_transactional_template", &[], "transactional/send-template")
            }
            Self::GetTransactionalStats => {
                get("get_transactional_stats", &[], "transactional/stats")
            }
            Self::GetTransactionalStatsDoi => {
                get("get_transactional_stats_doi", &[], "transactional/stats/doi")
            }
            Self::CreateTransaction => post("create_transaction", &[], "tracker/transaction"),
            Self::CreateBulkTransactions => {
                post("create_bulk_transactions", &[], "tracker/transaction-bulk")
            }
            Self::UpdateTransaction => put(
                "update_transaction",
                TRANSACTION,
                "tracker/transaction/{transaction_id}",
            ),
            Self::DeleteTransaction => delete_empty(
                "delete_transaction",
                TRANSACTION,
                "tracker/transaction/{transaction_id}/delete",
            ),
            Self::DeleteBulkTransactions => {
                delete("delete_bulk_transactions", &[], "tracker/transaction/delete-bulk")
            }
            Self::GetTransactions => {
                get("get_transactions", &[], "tracker/transaction").with_query()
            }
            Self::RefreshProductFeed => {
                get("refresh_product_feed", FEED, "feeds/{feed_id}/refresh")
            }
            Self::RefreshDataFeed => get("refresh_data_feed", FEED, "data-feeds/{feed_id}/refresh"),
            Self::AddEvent => post("add_event", &[], "tracker/events"),
            Self::Search => post("search", &[], "search"),
            Self::ImportCoupons => post("import_coupons", &[], "coupons/import"),
            Self::DeleteCoupons => delete("delete_coupons", &[], "coupons/delete"),
            Self::SetWebhook => post("set_webhook", &[], "account/settings/webhook"),
            Self::GetWebhook => get("get_webhook", &[], "account/settings/webhook"),
            Self::DeleteWebhook => delete_empty("delete_webhook", &[], "account/settings/webhook"),
        }
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
    assert_send_sync::<EndpointDescriptor>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_unique_names() {
        let names: HashSet<&str> = Endpoint::ALL.iter().map(|e| e.descriptor().name).collect();
        assert_eq!(names.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_ids_match_template_placeholders() {
        for endpoint in Endpoint::ALL {
            let descriptor = endpoint.descriptor();
            assert_eq!(
                placeholders(descriptor.template),
                descriptor.ids.to_vec(),
                "{}",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_body_rules_follow_method() {
        for endpoint in Endpoint::ALL {
            let descriptor = endpoint.descriptor();
            match descriptor.http_method {
                HttpMethod::Get => {
                    assert_eq!(descriptor.body, BodyRequirement::None, "{}", descriptor.name);
                }
                HttpMethod::Post | HttpMethod::Put => {
                    assert_eq!(descriptor.body, BodyRequirement::Required, "{}", descriptor.name);
                }
                HttpMethod::Delete => {
                    assert_ne!(descriptor.body, BodyRequirement::None, "{}", descriptor.name);
                }
            }
        }
    }

    #[test]
    fn test_templates_are_relative() {
        for endpoint in Endpoint::ALL {
            let template = endpoint.descriptor().template;
            assert!(!template.starts_with('/') && !template.ends_with('/'), "{template}");
        }
    }

    #[test]
    fn test_representative_entries() {
        let cases = [
            (Endpoint::ListLists, HttpMethod::Get, "lists"),
            (Endpoint::AddSubscriber, HttpMethod::Post, "lists/{list_id}/subscribe"),
            (Endpoint::RemoveSubscriber, HttpMethod::Delete, "lists/{list_id}/unsubscribe"),
            (Endpoint::UpdateSubscriber, HttpMethod::Put, "lists/{list_id}/update-subscriber"),
            (Endpoint::SendCampaign, HttpMethod::Get, "campaign/{campaign_id}/send"),
            (Endpoint::TriggerAutomation, HttpMethod::Post, "pipelines/{pipeline_id}/trigger"),
            (Endpoint::SendTransactionalEmail, HttpMethod::Post, "transactional/send-message"),
            (Endpoint::SetWebhook, HttpMethod::Post, "account/settings/webhook"),
        ];

        for (endpoint, method, template) in cases {
            let descriptor = endpoint.descriptor();
            assert_eq!(descriptor.http_method, method);
            assert_eq!(descriptor.template, template);
        }
    }

    #[test]
    fn test_query_accepting_endpoints() {
        let accepting: Vec<&str> = Endpoint::ALL
            .iter()
            .map(|e| e.descriptor())
            .filter(|d| d.accepts_query)
            .map(|d| d.name)
            .collect();
        assert_eq!(
            accepting,
            vec![
                "list_campaigns",
                "get_campaign_stats_detail",
                "get_pipeline_stats_detail",
                "get_pipeline_stats_for_emails",
                "get_transactions",
            ]
        );
    }

    #[test]
    fn test_resolve_path_rejects_wrong_identifier_count() {
        let descriptor = Endpoint::GetSubscriber.descriptor();
        assert_eq!(
            descriptor.resolve_path(&["1"]),
            Err(InvalidHttpRequestError::PathArguments {
                template: "lists/{list_id}/subscriber/{email}",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_resolve_path_encodes_identifiers() {
        let path = Endpoint::GetSubscriber
            .descriptor()
            .resolve_path(&["7", "jan.novak+news@example.cz"])
            .unwrap();
        assert_eq!(path, "lists/7/subscriber/jan.novak%2Bnews%40example.cz");
    }
}
