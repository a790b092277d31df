//! Typed calls to the eight registries.

use serde_json::Value;
use tupermiso_core::service::ServiceKind;

use crate::client::ServiceClient;
use crate::config::UpstreamConfig;
use crate::error::RegistryError;
use crate::types::{
    EncargoRecord, FacturaRecord, PadronRecord, PermisoRecord, SoapRecord, TasacionRecord,
};

/// One client per registry, sharing a single connection pool.
#[derive(Debug, Clone)]
pub struct RegistryClients {
    pub aach: ServiceClient,
    pub carabineros: ServiceClient,
    pub mtt: ServiceClient,
    pub prt: ServiceClient,
    pub sii: ServiceClient,
    pub srcei: ServiceClient,
    pub tgr: ServiceClient,
}

impl RegistryClients {
    /// Build the shared HTTP client with the configured timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &UpstreamConfig) -> Self {
        let make = |service: ServiceKind| {
            let url = config
                .base_url(service)
                .map(str::to_string)
                .unwrap_or_else(|| config.mode.base_url(service));
            ServiceClient::with_client(client.clone(), service, url)
        };

        Self {
            aach: make(ServiceKind::Aach),
            carabineros: make(ServiceKind::Carabineros),
            mtt: make(ServiceKind::Mtt),
            prt: make(ServiceKind::Prt),
            sii: make(ServiceKind::Sii),
            srcei: make(ServiceKind::Srcei),
            tgr: make(ServiceKind::Tgr),
        }
    }

    // -----------------------------------------------------------------------
    // AACH / Carabineros / PRT
    // -----------------------------------------------------------------------

    pub async fn soap(&self, ppu: &str) -> Result<SoapRecord, RegistryError> {
        self.aach.get_json(&format!("/soap/{ppu}")).await
    }

    pub async fn encargo(&self, ppu: &str) -> Result<EncargoRecord, RegistryError> {
        self.carabineros
            .get_json(&format!("/encargo_patente/{ppu}"))
            .await
    }

    pub async fn revision_tecnica(&self, ppu: &str) -> Result<Value, RegistryError> {
        self.prt.get_json(&format!("/revision_tecnica/{ppu}")).await
    }

    // -----------------------------------------------------------------------
    // MTT
    // -----------------------------------------------------------------------

    /// RPI fines of an owner. MTT answers 404 when there are none.
    pub async fn multas_pasajero(&self, rut: &str) -> Result<Vec<Value>, RegistryError> {
        self.mtt
            .get_json_with_query("/multas_pasajero/", &[("rut", rut)])
            .await
    }

    // -----------------------------------------------------------------------
    // SII
    // -----------------------------------------------------------------------

    pub async fn tasacion_fiscal(&self, codigo_sii: &str) -> Result<TasacionRecord, RegistryError> {
        self.sii
            .get_json_with_query("/tasacion_fiscal", &[("codigo_sii", codigo_sii)])
            .await
    }

    pub async fn factura_por_chasis(
        &self,
        num_chasis: &str,
    ) -> Result<FacturaRecord, RegistryError> {
        self.sii
            .get_json_with_query("/factura_venta_num_chasis", &[("num_chasis", num_chasis)])
            .await
    }

    // -----------------------------------------------------------------------
    // SRCEI
    // -----------------------------------------------------------------------

    pub async fn padron_vehiculo(&self, ppu: &str) -> Result<PadronRecord, RegistryError> {
        self.srcei.get_json(&format!("/padron/vehiculo/{ppu}")).await
    }

    pub async fn padron_por_rut(&self, rut: &str) -> Result<Vec<PadronRecord>, RegistryError> {
        self.srcei.get_json(&format!("/padron/{rut}")).await
    }

    pub async fn multas_transito(&self, ppu: &str) -> Result<Vec<Value>, RegistryError> {
        self.srcei.get_json(&format!("/multas_transito/{ppu}")).await
    }

    // -----------------------------------------------------------------------
    // TGR
    // -----------------------------------------------------------------------

    pub async fn permiso(&self, ppu: &str) -> Result<PermisoRecord, RegistryError> {
        self.tgr.get_json(&format!("/consultar_permiso/{ppu}")).await
    }

    pub async fn permiso_por_id(&self, id: i64) -> Result<PermisoRecord, RegistryError> {
        self.tgr.get_json(&format!("/consultar_permiso_id/{id}")).await
    }

    /// Forward a permit issuance to TGR and return its reply unchanged.
    pub async fn subir_permiso(&self, body: &Value) -> Result<Value, RegistryError> {
        self.tgr.post_json("/subir_permiso/", body).await
    }
}
