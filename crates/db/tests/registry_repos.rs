//! Integration tests for the single-table registry repositories.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use tupermiso_db::models::encargo::CreateEncargoPatente;
use tupermiso_db::models::factura::FacturaCompra;
use tupermiso_db::models::multa_rpi::CreateMultaRpi;
use tupermiso_db::models::multa_transito::CreateMultaTransito;
use tupermiso_db::models::padron::Padron;
use tupermiso_db::models::reg_transporte::RegistroTransporte;
use tupermiso_db::models::revision_tecnica::{
    CreateRevisionTecnica, ESTADO_APROBADA, ESTADO_RECHAZADA,
};
use tupermiso_db::models::soap::CreateSoap;
use tupermiso_db::repositories::{
    ClaveUnicaRepo, EncargoRepo, FacturaRepo, MultaRpiRepo, MultaTransitoRepo, PadronRepo,
    RegTransporteRepo, RevisionTecnicaRepo, SoapRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

fn new_soap(ppu: &str, desde: NaiveDate, hasta: NaiveDate) -> CreateSoap {
    CreateSoap {
        ppu: ppu.to_string(),
        compania: "Seguros Andes".to_string(),
        rige_desde: desde,
        rige_hasta: hasta,
        prima: 8_990,
    }
}

fn new_revision(ppu: &str, fecha: NaiveDate, estado: &str) -> CreateRevisionTecnica {
    CreateRevisionTecnica {
        ppu: ppu.to_string(),
        fecha,
        codigo_planta: "PRT-13".to_string(),
        planta: "Planta Maipú".to_string(),
        nom_certificado: "CRT".to_string(),
        fecha_vencimiento: fecha + chrono::Days::new(365),
        estado: estado.to_string(),
    }
}

fn new_padron(ppu: &str, rut: &str, inscripcion: NaiveDate) -> Padron {
    Padron {
        ppu: ppu.to_string(),
        rut: rut.to_string(),
        tipo_vehiculo: "Automóvil".to_string(),
        marca: "Toyota".to_string(),
        modelo: "Yaris".to_string(),
        anio: 2021,
        color: "Rojo".to_string(),
        cilindrada: 1500,
        num_motor: "MTR123".to_string(),
        num_chasis: format!("CH-{ppu}"),
        fecha_inscripcion: inscripcion,
    }
}

// ---------------------------------------------------------------------------
// AACH
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/aach")]
async fn test_soap_latest_policy_wins(pool: PgPool) {
    SoapRepo::create(&pool, &new_soap("BBCL12", date(2023, 1, 1), date(2023, 12, 31)))
        .await
        .unwrap();
    let newest = SoapRepo::create(&pool, &new_soap("BBCL12", date(2024, 1, 1), date(2024, 12, 31)))
        .await
        .unwrap();

    let found = SoapRepo::find_latest_by_ppu(&pool, "BBCL12").await.unwrap().unwrap();
    assert_eq!(found.num_poliza, newest.num_poliza);
    assert_eq!(found.rige_hasta, date(2024, 12, 31));

    assert!(SoapRepo::find_latest_by_ppu(&pool, "ZZZZ99").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations/aach")]
async fn test_soap_rejects_inverted_range(pool: PgPool) {
    let result =
        SoapRepo::create(&pool, &new_soap("BBCL12", date(2024, 6, 1), date(2024, 1, 1))).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Carabineros
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/carabineros")]
async fn test_encargo_roundtrip(pool: PgPool) {
    let input = CreateEncargoPatente {
        ppu: "CDFG34".to_string(),
        encargo: true,
        patente_delantera: true,
        patente_trasera: false,
        vin: false,
        motor: true,
    };
    EncargoRepo::create(&pool, &input).await.unwrap();

    let found = EncargoRepo::find_by_ppu(&pool, "CDFG34").await.unwrap().unwrap();
    assert!(found.encargo);
    assert!(found.patente_delantera);
    assert!(!found.patente_trasera);
    assert!(found.motor);
}

// ---------------------------------------------------------------------------
// MTT
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/mtt")]
async fn test_multas_rpi_list_and_delete(pool: PgPool) {
    for rol in ["C-101", "C-102"] {
        MultaRpiRepo::create(
            &pool,
            &CreateMultaRpi {
                rut: "12345678-5".to_string(),
                rol_causa: rol.to_string(),
                anio_causa: 2024,
                nombre_jpl: "1er JPL Santiago".to_string(),
                monto_multa: 50_000,
            },
        )
        .await
        .unwrap();
    }

    let multas = MultaRpiRepo::list_by_rut(&pool, "12345678-5").await.unwrap();
    assert_eq!(multas.len(), 2);
    assert_eq!(multas[0].rol_causa, "C-101");

    assert_eq!(MultaRpiRepo::delete_by_rut(&pool, "12345678-5").await.unwrap(), 2);
    assert_eq!(MultaRpiRepo::delete_by_rut(&pool, "12345678-5").await.unwrap(), 0);
    assert!(MultaRpiRepo::list_by_rut(&pool, "12345678-5").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations/mtt")]
async fn test_registro_transporte_by_ppu(pool: PgPool) {
    let registro = RegistroTransporte {
        ppu: "FGHJ56".to_string(),
        fecha_entrada_rnt: datetime(2019, 3, 1),
        tipo_servicio: "Taxi colectivo".to_string(),
        capacidad: 4,
        estado_vehiculo: "Activo".to_string(),
        fecha_vencimiento_certificado: datetime(2026, 3, 1),
        region: 13,
        anio_fabricacion: 2018,
        cinturon_obligatorio: true,
        antiguedad_vehiculo: 7,
        marca: "Nissan".to_string(),
        modelo: "Sentra".to_string(),
    };
    RegTransporteRepo::create(&pool, &registro).await.unwrap();

    let found = RegTransporteRepo::find_by_ppu(&pool, "FGHJ56").await.unwrap().unwrap();
    assert_eq!(found.region, 13);
    assert!(found.cinturon_obligatorio);
    assert!(RegTransporteRepo::find_by_ppu(&pool, "XXXX00").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// PRT
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/prt")]
async fn test_revision_ignores_rejections(pool: PgPool) {
    let aprobada = RevisionTecnicaRepo::create(
        &pool,
        &new_revision("GHJK78", date(2024, 2, 1), ESTADO_APROBADA),
    )
    .await
    .unwrap();
    RevisionTecnicaRepo::create(&pool, &new_revision("GHJK78", date(2024, 8, 1), ESTADO_RECHAZADA))
        .await
        .unwrap();

    let found = RevisionTecnicaRepo::find_latest_approved(&pool, "GHJK78")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id_rev_tecnica, aprobada.id_rev_tecnica);
}

#[sqlx::test(migrations = "./migrations/prt")]
async fn test_revision_rejects_unknown_estado(pool: PgPool) {
    let result =
        RevisionTecnicaRepo::create(&pool, &new_revision("GHJK78", date(2024, 2, 1), "pendiente"))
            .await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// SGD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/sgd")]
async fn test_clave_unica_unique_rut(pool: PgPool) {
    ClaveUnicaRepo::create(&pool, "11111111-1", "$argon2id$stub").await.unwrap();
    assert!(ClaveUnicaRepo::create(&pool, "11111111-1", "$argon2id$other").await.is_err());

    let found = ClaveUnicaRepo::find_by_rut(&pool, "11111111-1").await.unwrap().unwrap();
    assert_eq!(found.contrasena_hash, "$argon2id$stub");
}

// ---------------------------------------------------------------------------
// SII
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/sii")]
async fn test_factura_by_numero_and_chasis(pool: PgPool) {
    let factura = FacturaCompra {
        num_factura: 900_001,
        num_chasis: "9BWZZZ377VT004251".to_string(),
        tipo_vehiculo: "Automóvil".to_string(),
        precio_neto: 12_500_000,
        puertas: 5,
        asientos: 5,
        combustible: "Gasolina".to_string(),
        peso: "1200kg".to_string(),
        transmision: "Manual".to_string(),
        traccion: "4x2".to_string(),
        cilindrada: 1600,
        carga: 0,
        tipo_sello: "Verde".to_string(),
    };
    FacturaRepo::create(&pool, &factura).await.unwrap();

    let by_num = FacturaRepo::find_by_numero(&pool, 900_001).await.unwrap().unwrap();
    assert_eq!(by_num.precio_neto, 12_500_000);

    let by_chasis = FacturaRepo::find_by_chasis(&pool, "9BWZZZ377VT004251")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_chasis.num_factura, 900_001);

    assert!(FacturaRepo::find_by_numero(&pool, 1).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// SRCEI
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/srcei")]
async fn test_padron_lists_owner_vehicles(pool: PgPool) {
    PadronRepo::create(&pool, &new_padron("JKLP12", "12345678-5", date(2022, 5, 1)))
        .await
        .unwrap();
    PadronRepo::create(&pool, &new_padron("BBCL12", "12345678-5", date(2020, 1, 1)))
        .await
        .unwrap();
    PadronRepo::create(&pool, &new_padron("CDFG34", "99999999-9", date(2021, 1, 1)))
        .await
        .unwrap();

    let owned = PadronRepo::list_by_rut(&pool, "12345678-5").await.unwrap();
    let ppus: Vec<_> = owned.iter().map(|p| p.ppu.as_str()).collect();
    assert_eq!(ppus, ["BBCL12", "JKLP12"]);

    assert!(PadronRepo::list_by_rut(&pool, "1-9").await.unwrap().is_empty());
    assert!(PadronRepo::find_by_ppu(&pool, "CDFG34").await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations/srcei")]
async fn test_multas_transito_by_ppu(pool: PgPool) {
    MultaTransitoRepo::create(
        &pool,
        &CreateMultaTransito {
            ppu: "JKLP12".to_string(),
            rol_causa: 4521,
            jpl: 3,
        },
    )
    .await
    .unwrap();

    assert_eq!(MultaTransitoRepo::list_by_ppu(&pool, "JKLP12").await.unwrap().len(), 1);
    assert!(MultaTransitoRepo::list_by_ppu(&pool, "BBCL12").await.unwrap().is_empty());
}
