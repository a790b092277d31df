//! HTTP tests for the single-table registry services.

mod common;

use axum::http::StatusCode;
use chrono::{Days, Local, NaiveDate};
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use tupermiso_api::auth::password::hash_password;
use tupermiso_core::service::ServiceKind;
use tupermiso_db::models::factura::FacturaCompra;
use tupermiso_db::models::multa_rpi::CreateMultaRpi;
use tupermiso_db::models::multa_transito::CreateMultaTransito;
use tupermiso_db::models::padron::Padron;
use tupermiso_db::models::revision_tecnica::{CreateRevisionTecnica, ESTADO_APROBADA};
use tupermiso_db::models::soap::CreateSoap;
use tupermiso_db::models::tasacion::TasacionFiscal;
use tupermiso_db::repositories::{
    ClaveUnicaRepo, FacturaRepo, MultaRpiRepo, MultaTransitoRepo, PadronRepo,
    RevisionTecnicaRepo, SoapRepo, TasacionRepo,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// AACH
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/aach")]
async fn soap_lookup_reports_vigencia(pool: PgPool) {
    SoapRepo::create(
        &pool,
        &CreateSoap {
            ppu: "BBCL12".to_string(),
            compania: "Seguros Andes".to_string(),
            rige_desde: today() - Days::new(30),
            rige_hasta: today() + Days::new(335),
            prima: 8_990,
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool, ServiceKind::Aach);

    // Lower-case plates are accepted.
    let response = get(app, "/soap/bbcl12").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ppu"], "BBCL12");
    assert_eq!(json["compania"], "Seguros Andes");
    assert_eq!(json["vigencia"], "Vigente");
}

#[sqlx::test(migrations = "../db/migrations/aach")]
async fn expired_soap_is_no_vigente(pool: PgPool) {
    SoapRepo::create(
        &pool,
        &CreateSoap {
            ppu: "BBCL12".to_string(),
            compania: "Seguros Andes".to_string(),
            rige_desde: date(2020, 1, 1),
            rige_hasta: date(2020, 12, 31),
            prima: 8_990,
        },
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool, ServiceKind::Aach);

    let json = body_json(get(app, "/soap/BBCL12").await).await;
    assert_eq!(json["vigencia"], "No Vigente");
}

#[sqlx::test(migrations = "../db/migrations/aach")]
async fn soap_lookup_errors(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Aach);

    let response = get(app.clone(), "/soap/ZZZZ99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "SOAP no encontrado");

    let response = get(app.clone(), "/soap/BB-CL12").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "PPU no puede contener caracteres especiales o espacios"
    );

    let response = get(app, "/soap/1234AB").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Formato de PPU inválido: 1234AB"
    );
}

#[sqlx::test(migrations = "../db/migrations/aach")]
async fn create_soap_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Aach);

    let response = post_json(
        app.clone(),
        "/create_soap/",
        json!({
            "ppu": "cdfg34",
            "compania": "Seguros Andes",
            "rige_desde": "2025-01-01",
            "rige_hasta": "2025-12-31",
            "prima": 9500
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["ppu"], "CDFG34");
    assert!(json["num_poliza"].as_i64().unwrap() > 0);

    let response = post_json(
        app.clone(),
        "/create_soap/",
        json!({
            "ppu": "CDFG34",
            "compania": "Seguros Andes",
            "rige_desde": "2025-06-01",
            "rige_hasta": "2025-01-01",
            "prima": 9500
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/create_soap/",
        json!({
            "ppu": "CDFG34",
            "compania": "Seguros Andes",
            "rige_desde": "2025-01-01",
            "rige_hasta": "2025-12-31",
            "prima": -1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations/aach")]
async fn create_soap_bounds_company_name(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Aach);
    let body = |compania: String| {
        json!({
            "ppu": "CDFG34",
            "compania": compania,
            "rige_desde": "2025-01-01",
            "rige_hasta": "2025-12-31",
            "prima": 9500
        })
    };

    let response = post_json(app.clone(), "/create_soap/", body("X".repeat(60))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = post_json(app, "/create_soap/", body("Ñ".repeat(50))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Carabineros
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/carabineros")]
async fn encargo_create_then_lookup(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Carabineros);

    let response = post_json(
        app.clone(),
        "/encargo_patente/",
        json!({ "ppu": "FGHJ56", "encargo": true, "vin": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app.clone(), "/encargo_patente/FGHJ56").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["encargo"], true);
    assert_eq!(json["vin"], true);
    assert_eq!(json["motor"], false);

    let response = get(app, "/encargo_patente/BBCL12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Encargo no encontrado");
}

// ---------------------------------------------------------------------------
// MTT
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/mtt")]
async fn multas_pasajero_list_and_delete(pool: PgPool) {
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
    let app = common::build_test_app(pool, ServiceKind::Mtt);

    // Dotted RUTs are normalized before the lookup.
    let response = get(app.clone(), "/multas_pasajero/?rut=12.345.678-5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = delete(app.clone(), "/delete_multas_rpi/?rut=12345678-5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Se eliminaron 2 multas para el RUT 12345678-5."
    );

    let response = get(app.clone(), "/multas_pasajero/?rut=12345678-5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No se encontraron multas para este RUT."
    );

    let response = delete(app, "/delete_multas_rpi/?rut=12345678-5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations/mtt")]
async fn mtt_rejects_missing_parameters(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Mtt);

    let response = get(app.clone(), "/multas_pasajero/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Debe ingresar un RUT.");

    let response = get(app.clone(), "/registro_transporte/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Debe ingresar un PPU.");

    let response = get(app, "/registro_transporte/?ppu=BBCL12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No se encontró el registro de transporte para este PPU."
    );
}

// ---------------------------------------------------------------------------
// PRT
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/prt")]
async fn revision_tecnica_only_counts_approved(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), ServiceKind::Prt);

    let response = post_json(
        app.clone(),
        "/revision_tecnica/",
        json!({
            "ppu": "GHJK78",
            "fecha": "2024-08-01",
            "codigo_planta": "PRT-13",
            "planta": "Planta Maipú",
            "nom_certificado": "CRT",
            "fecha_vencimiento": "2025-08-01",
            "estado": "Rechazada"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["estado"], "rechazada");

    let response = get(app.clone(), "/revision_tecnica/GHJK78").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No hay revisiones técnicas aprobadas para este PPU"
    );

    RevisionTecnicaRepo::create(
        &pool,
        &CreateRevisionTecnica {
            ppu: "GHJK78".to_string(),
            fecha: today() - Days::new(10),
            codigo_planta: "PRT-13".to_string(),
            planta: "Planta Maipú".to_string(),
            nom_certificado: "CRT".to_string(),
            fecha_vencimiento: today() + Days::new(355),
            estado: ESTADO_APROBADA.to_string(),
        },
    )
    .await
    .unwrap();

    let json = body_json(get(app, "/revision_tecnica/GHJK78").await).await;
    assert_eq!(json["estado"], "aprobada");
    assert_eq!(json["vigencia"], "Vigente");
}

#[sqlx::test(migrations = "../db/migrations/prt")]
async fn revision_tecnica_rejects_unknown_estado(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Prt);

    let response = post_json(
        app,
        "/revision_tecnica/",
        json!({
            "ppu": "GHJK78",
            "fecha": "2024-08-01",
            "codigo_planta": "PRT-13",
            "planta": "Planta Maipú",
            "nom_certificado": "CRT",
            "fecha_vencimiento": "2025-08-01",
            "estado": "pendiente"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Estado inválido. Debe ser 'aprobada' o 'rechazada'"
    );
}

#[sqlx::test(migrations = "../db/migrations/prt")]
async fn revision_tecnica_bounds_text_fields(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Prt);

    let response = post_json(
        app,
        "/revision_tecnica/",
        json!({
            "ppu": "GHJK78",
            "fecha": "2024-08-01",
            "codigo_planta": "PRT-13-SANTIAGO-CENTRO",
            "planta": "Planta Maipú",
            "nom_certificado": "CRT",
            "fecha_vencimiento": "2025-08-01",
            "estado": "aprobada"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// SGD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/sgd")]
async fn clave_unica_accepts_the_right_password(pool: PgPool) {
    let hash = hash_password("clave-secreta").unwrap();
    ClaveUnicaRepo::create(&pool, "11111111-1", &hash).await.unwrap();
    let app = common::build_test_app(pool, ServiceKind::Sgd);

    let response = get(app.clone(), "/validar_clave_unica/11111111-1/clave-secreta").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["rut"], "11111111-1");
    assert!(json.get("contrasena_hash").is_none());

    let response = post_json(
        app,
        "/validar_clave_unica/",
        json!({ "rut": "11.111.111-1", "contrasena": "clave-secreta" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations/sgd")]
async fn clave_unica_rejections_look_alike(pool: PgPool) {
    let hash = hash_password("clave-secreta").unwrap();
    ClaveUnicaRepo::create(&pool, "11111111-1", &hash).await.unwrap();
    let app = common::build_test_app(pool, ServiceKind::Sgd);

    let wrong_password = get(app.clone(), "/validar_clave_unica/11111111-1/otra").await;
    let unknown_rut = get(app.clone(), "/validar_clave_unica/12345678-5/otra").await;
    assert_eq!(wrong_password.status(), StatusCode::NOT_FOUND);
    assert_eq!(unknown_rut.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_rut).await
    );

    let response = get(app, "/validar_clave_unica/12345678/otra").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "RUT inválido");
}

// ---------------------------------------------------------------------------
// SII
// ---------------------------------------------------------------------------

fn tasacion(codigo: &str) -> TasacionFiscal {
    TasacionFiscal {
        codigo_sii: codigo.to_string(),
        tipo: "Automóvil".to_string(),
        anio: 2021,
        marca: "Toyota".to_string(),
        modelo: "Yaris".to_string(),
        version: "1.5 GLI".to_string(),
        combustible: "Gasolina".to_string(),
        cilindrada: 1500,
        potencia: 107,
        marchas: 6,
        transmision: "Manual".to_string(),
        traccion: "4x2".to_string(),
        puertas: 5,
        pais: "Japón".to_string(),
        equipamiento: "Full".to_string(),
        tasacion: 9_800_000,
        num_ejes: 2,
        valor_permiso: 210_000,
    }
}

fn factura(num: i64, chasis: &str) -> FacturaCompra {
    FacturaCompra {
        num_factura: num,
        num_chasis: chasis.to_string(),
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
    }
}

#[sqlx::test(migrations = "../db/migrations/sii")]
async fn sii_lookups(pool: PgPool) {
    TasacionRepo::create(&pool, &tasacion("TY-YARIS-21")).await.unwrap();
    FacturaRepo::create(&pool, &factura(900_001, "9BWZZZ377VT004251"))
        .await
        .unwrap();
    let app = common::build_test_app(pool, ServiceKind::Sii);

    let json = body_json(get(app.clone(), "/tasacion_fiscal?codigo_sii=TY-YARIS-21").await).await;
    assert_eq!(json["tasacion"], 9_800_000);

    let json = body_json(get(app.clone(), "/factura_venta?num_factura=900001").await).await;
    assert_eq!(json["num_chasis"], "9BWZZZ377VT004251");

    let json = body_json(
        get(app, "/factura_venta_num_chasis?num_chasis=9BWZZZ377VT004251").await,
    )
    .await;
    assert_eq!(json["num_factura"], 900_001);
}

#[sqlx::test(migrations = "../db/migrations/sii")]
async fn sii_missing_and_unknown_parameters(pool: PgPool) {
    let app = common::build_test_app(pool, ServiceKind::Sii);

    let cases = [
        ("/tasacion_fiscal", StatusCode::BAD_REQUEST, "Debe ingresar un Código SII."),
        ("/tasacion_fiscal?codigo_sii=%20", StatusCode::BAD_REQUEST, "Debe ingresar un Código SII."),
        ("/tasacion_fiscal?codigo_sii=NOPE", StatusCode::NOT_FOUND, "El Código SII no existe"),
        ("/factura_venta", StatusCode::BAD_REQUEST, "Debe ingresar un N° de Factura."),
        ("/factura_venta?num_factura=1", StatusCode::NOT_FOUND, "El N° de Factura no existe"),
        ("/factura_venta_num_chasis", StatusCode::BAD_REQUEST, "Debe ingresar un N° de chasis."),
        ("/factura_venta_num_chasis?num_chasis=X", StatusCode::NOT_FOUND, "La factura no existe"),
    ];

    for (uri, status, message) in cases {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), status, "{uri}");
        assert_eq!(body_json(response).await["error"], message, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// SRCEI
// ---------------------------------------------------------------------------

fn padron(ppu: &str, rut: &str) -> Padron {
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
        fecha_inscripcion: date(2021, 3, 1),
    }
}

#[sqlx::test(migrations = "../db/migrations/srcei")]
async fn padron_by_owner_and_plate(pool: PgPool) {
    PadronRepo::create(&pool, &padron("BBCL12", "12345678-5")).await.unwrap();
    PadronRepo::create(&pool, &padron("JKLP12", "12345678-5")).await.unwrap();
    let app = common::build_test_app(pool, ServiceKind::Srcei);

    let json = body_json(get(app.clone(), "/padron/12345678-5").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // An owner with nothing registered is not an error.
    let response = get(app.clone(), "/padron/9876543-3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    let json = body_json(get(app.clone(), "/padron/vehiculo/JKLP12").await).await;
    assert_eq!(json["num_chasis"], "CH-JKLP12");

    let response = get(app, "/padron/vehiculo/ZZZZ99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Padrón no encontrado");
}

#[sqlx::test(migrations = "../db/migrations/srcei")]
async fn multas_transito_by_plate(pool: PgPool) {
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
    let app = common::build_test_app(pool, ServiceKind::Srcei);

    let json = body_json(get(app.clone(), "/multas_transito/JKLP12").await).await;
    assert_eq!(json[0]["rol_causa"], 4521);

    let json = body_json(get(app, "/multas_transito/BBCL12").await).await;
    assert!(json.as_array().unwrap().is_empty());
}
