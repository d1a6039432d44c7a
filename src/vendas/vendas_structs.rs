// src/vendas/vendas_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::produtos::produtos_structs::ProdutoEstoque;
use crate::shared::decimal;
use crate::shared::erros::{exigir_preenchido, ApiError};

/// Casas decimais dos valores monetários (NUMERIC(12, 2) no banco).
const CASAS_MONETARIAS: i64 = 2;

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Linha do carrinho: referência ao produto com nome e preço congelados no momento da venda.
/// O front end envia o produto inteiro, com o id do produto em `id`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCarrinho {
    #[serde(alias = "id")]
    pub product_id: i32,
    pub nome: String,
    #[serde(with = "decimal")]
    pub preco: BigDecimal,
    pub qtd: i32,
}

/// Carrinho de compras. Vive no cliente; o servidor só aplica as regras sobre ele.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Carrinho {
    pub itens: Vec<ItemCarrinho>,
}

impl Carrinho {
    pub fn new(itens: Vec<ItemCarrinho>) -> Self {
        Carrinho { itens }
    }

    /// Adiciona uma unidade do produto ao carrinho.
    ///
    /// Peças sem estoque não entram; se o produto já está no carrinho,
    /// vale a regra de `incrementar`. Em caso de recusa o carrinho não muda.
    pub fn adicionar(&mut self, produto: &ProdutoEstoque) -> Result<(), ApiError> {
        if self.itens.iter().any(|item| item.product_id == produto.id) {
            return self.incrementar(produto);
        }

        if produto.controla_estoque() && produto.estoque <= 0 {
            return Err(ApiError::SemEstoque(format!("Produto {} sem estoque.", produto.nome)));
        }

        self.itens.push(ItemCarrinho {
            product_id: produto.id,
            nome: produto.nome.clone(),
            preco: produto.preco.clone(),
            qtd: 1,
        });
        Ok(())
    }

    /// Soma uma unidade a um item existente. Para peças, a quantidade no
    /// carrinho não pode passar do estoque atual.
    pub fn incrementar(&mut self, produto: &ProdutoEstoque) -> Result<(), ApiError> {
        let item = self
            .itens
            .iter_mut()
            .find(|item| item.product_id == produto.id)
            .ok_or_else(|| ApiError::NaoEncontrado(format!("Produto {} não está no carrinho.", produto.nome)))?;

        if produto.controla_estoque() && item.qtd >= produto.estoque {
            return Err(ApiError::SemEstoque(format!(
                "Estoque máximo atingido para {}.",
                produto.nome
            )));
        }

        item.qtd = item
            .qtd
            .checked_add(1)
            .ok_or_else(|| ApiError::Validacao(format!("Quantidade inválida para {}.", item.nome)))?;
        Ok(())
    }

    /// Σ preço × quantidade.
    pub fn subtotal(&self) -> BigDecimal {
        self.itens
            .iter()
            .fold(zero(), |acc, item| acc + &item.preco * &BigDecimal::from(item.qtd))
    }

    /// Carrinho não vazio, quantidades ≥ 1 e preços não negativos.
    pub fn validar(&self) -> Result<(), ApiError> {
        if self.itens.is_empty() {
            return Err(ApiError::Validacao("O carrinho está vazio.".to_string()));
        }
        self.validar_linhas()
    }

    /// Quantidades ≥ 1 e preços não negativos. Um carrinho vazio passa.
    pub fn validar_linhas(&self) -> Result<(), ApiError> {
        for item in &self.itens {
            if item.qtd < 1 {
                return Err(ApiError::Validacao(format!("Quantidade inválida para {}.", item.nome)));
            }
            if item.preco < zero() {
                return Err(ApiError::Validacao(format!("Preço inválido para {}.", item.nome)));
            }
        }
        Ok(())
    }

    /// Arredonda os preços para centavos, como o banco vai gravá-los.
    pub fn normalizado(&self) -> Carrinho {
        Carrinho {
            itens: self
                .itens
                .iter()
                .map(|item| ItemCarrinho {
                    preco: item.preco.round(CASAS_MONETARIAS),
                    ..item.clone()
                })
                .collect(),
        }
    }
}

/// Dados de pagamento informados no fechamento da venda.
#[derive(Debug, Clone)]
pub struct Pagamento {
    pub forma: String,
    pub descontos: BigDecimal,
    pub acrescimos: BigDecimal,
    pub recebido: BigDecimal,
}

/// Valores calculados de uma venda.
#[derive(Debug, Clone, PartialEq)]
pub struct Totais {
    pub subtotal: BigDecimal,
    pub descontos: BigDecimal,
    pub acrescimos: BigDecimal,
    pub total: BigDecimal,
    pub recebido: BigDecimal,
    pub troco: BigDecimal,
}

impl Totais {
    /// `total = subtotal − descontos + acréscimos`; `troco = max(recebido − total, 0)`.
    pub fn calcular(carrinho: &Carrinho, pagamento: &Pagamento) -> Result<Totais, ApiError> {
        carrinho.validar()?;
        exigir_preenchido(&pagamento.forma, "A forma de pagamento é obrigatória.")?;

        let descontos = pagamento.descontos.round(CASAS_MONETARIAS);
        let acrescimos = pagamento.acrescimos.round(CASAS_MONETARIAS);
        let recebido = pagamento.recebido.round(CASAS_MONETARIAS);
        if descontos < zero() || acrescimos < zero() || recebido < zero() {
            return Err(ApiError::Validacao(
                "Descontos, acréscimos e valor recebido não podem ser negativos.".to_string(),
            ));
        }

        let subtotal = carrinho.normalizado().subtotal();
        let total = &subtotal - &descontos + &acrescimos;
        if total < zero() {
            return Err(ApiError::Validacao("O desconto não pode ser maior que o subtotal.".to_string()));
        }

        let troco = if recebido > total { &recebido - &total } else { zero() };

        Ok(Totais {
            subtotal,
            descontos,
            acrescimos,
            total,
            recebido,
            troco,
        })
    }
}

/// Número exibido da venda: quantidade de vendas existentes + 1, com 6 dígitos.
pub fn formatar_numero(vendas_existentes: i64) -> String {
    format!("{:06}", vendas_existentes + 1)
}

/// Estrutura para receber a venda na requisição POST /sales.
///
/// numero, dataHora, subtotal, total e troco enviados pelo cliente são
/// ignorados: o servidor os calcula.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaVenda {
    #[serde(default)]
    pub pagamento: String,
    pub cliente_id: Option<i32>,
    #[serde(default = "zero", with = "decimal")]
    pub descontos: BigDecimal,
    #[serde(default = "zero", with = "decimal")]
    pub acrescimos: BigDecimal,
    #[serde(default = "zero", with = "decimal")]
    pub recebido: BigDecimal,
    #[serde(default)]
    pub itens: Vec<ItemCarrinho>,
}

impl NovaVenda {
    pub fn separar(self) -> (Carrinho, Pagamento, Option<i32>) {
        let pagamento = Pagamento {
            forma: self.pagamento,
            descontos: self.descontos,
            acrescimos: self.acrescimos,
            recebido: self.recebido,
        };
        (Carrinho::new(self.itens), pagamento, self.cliente_id)
    }
}

/// Requisição de POST /sales/cart/items: o carrinho atual e o produto a somar.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdicionarAoCarrinho {
    #[serde(default)]
    pub itens: Vec<ItemCarrinho>,
    pub product_id: i32,
}

/// Cabeçalho da venda gravado no banco.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Venda {
    pub id: i32,
    pub numero: String,
    pub data_hora: DateTime<Utc>,
    #[serde(with = "decimal")]
    pub subtotal: BigDecimal,
    #[serde(with = "decimal")]
    pub descontos: BigDecimal,
    #[serde(with = "decimal")]
    pub acrescimos: BigDecimal,
    #[serde(with = "decimal")]
    pub total: BigDecimal,
    pub pagamento: String,
    pub cliente_id: Option<i32>,
    #[serde(with = "decimal")]
    pub recebido: BigDecimal,
    #[serde(with = "decimal")]
    pub troco: BigDecimal,
}

/// Item gravado de uma venda. `product_id` fica nulo se o produto for excluído depois.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ItemVenda {
    pub id: i32,
    pub sale_id: i32,
    pub product_id: Option<i32>,
    pub nome: String,
    #[serde(with = "decimal")]
    pub preco: BigDecimal,
    pub qtd: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendaComItens {
    #[serde(flatten)]
    pub venda: Venda,
    pub itens: Vec<ItemVenda>,
}

/// Estrutura para a resposta de sucesso da venda.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendaResponse {
    pub message: String,
    pub sale_id: i32,
    pub numero: String,
    #[serde(with = "decimal")]
    pub subtotal: BigDecimal,
    #[serde(with = "decimal")]
    pub total: BigDecimal,
    #[serde(with = "decimal")]
    pub troco: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(valor: &str) -> BigDecimal {
        BigDecimal::from_str(valor).unwrap()
    }

    fn pneu(estoque: i32) -> ProdutoEstoque {
        ProdutoEstoque {
            id: 3,
            nome: "Pneu Aro 15".to_string(),
            preco: dec("350.00"),
            estoque,
            categoria_nome: Some("Peças".to_string()),
        }
    }

    fn troca_de_oleo() -> ProdutoEstoque {
        ProdutoEstoque {
            id: 1,
            nome: "Troca de Óleo - Sintético".to_string(),
            preco: dec("250.00"),
            estoque: 0,
            categoria_nome: Some("Serviços".to_string()),
        }
    }

    fn dinheiro(recebido: &str) -> Pagamento {
        Pagamento {
            forma: "Dinheiro".to_string(),
            descontos: zero(),
            acrescimos: zero(),
            recebido: dec(recebido),
        }
    }

    #[test]
    fn pneu_aro_15_duas_unidades() {
        let carrinho = Carrinho::new(vec![ItemCarrinho {
            product_id: 3,
            nome: "Pneu Aro 15".to_string(),
            preco: dec("350.00"),
            qtd: 2,
        }]);

        let totais = Totais::calcular(&carrinho, &dinheiro("0")).unwrap();
        assert_eq!(totais.subtotal, dec("700.00"));
        assert_eq!(totais.total, dec("700.00"));
        assert_eq!(totais.troco, zero());
    }

    #[test]
    fn total_aplica_descontos_e_acrescimos() {
        let carrinho = Carrinho::new(vec![
            ItemCarrinho { product_id: 3, nome: "Pneu Aro 15".into(), preco: dec("350.00"), qtd: 2 },
            ItemCarrinho { product_id: 4, nome: "Filtro de Ar".into(), preco: dec("45.00"), qtd: 3 },
        ]);
        let pagamento = Pagamento {
            forma: "Pix".to_string(),
            descontos: dec("35.00"),
            acrescimos: dec("10.50"),
            recebido: zero(),
        };

        let totais = Totais::calcular(&carrinho, &pagamento).unwrap();
        assert_eq!(totais.subtotal, carrinho.subtotal());
        assert_eq!(totais.subtotal, dec("835.00"));
        assert_eq!(totais.total, &totais.subtotal - &totais.descontos + &totais.acrescimos);
        assert_eq!(totais.total, dec("810.50"));
    }

    #[test]
    fn troco_so_quando_recebido_passa_do_total() {
        let carrinho = Carrinho::new(vec![ItemCarrinho {
            product_id: 4,
            nome: "Filtro de Ar".into(),
            preco: dec("45.00"),
            qtd: 1,
        }]);

        assert_eq!(Totais::calcular(&carrinho, &dinheiro("50")).unwrap().troco, dec("5.00"));
        assert_eq!(Totais::calcular(&carrinho, &dinheiro("45")).unwrap().troco, zero());
        assert_eq!(Totais::calcular(&carrinho, &dinheiro("10")).unwrap().troco, zero());
    }

    #[test]
    fn venda_invalida_e_recusada() {
        let vazio = Carrinho::default();
        assert!(matches!(Totais::calcular(&vazio, &dinheiro("0")), Err(ApiError::Validacao(_))));

        let sem_quantidade = Carrinho::new(vec![ItemCarrinho {
            product_id: 4,
            nome: "Filtro de Ar".into(),
            preco: dec("45.00"),
            qtd: 0,
        }]);
        assert!(matches!(Totais::calcular(&sem_quantidade, &dinheiro("0")), Err(ApiError::Validacao(_))));

        let carrinho = Carrinho::new(vec![ItemCarrinho {
            product_id: 4,
            nome: "Filtro de Ar".into(),
            preco: dec("45.00"),
            qtd: 1,
        }]);
        let desconto_grande = Pagamento { descontos: dec("100"), ..dinheiro("0") };
        assert!(matches!(Totais::calcular(&carrinho, &desconto_grande), Err(ApiError::Validacao(_))));

        let sem_forma = Pagamento { forma: " ".into(), ..dinheiro("0") };
        assert!(matches!(Totais::calcular(&carrinho, &sem_forma), Err(ApiError::Validacao(_))));
    }

    #[test]
    fn numero_tem_seis_digitos() {
        assert_eq!(formatar_numero(0), "000001");
        assert_eq!(formatar_numero(41), "000042");
        assert_eq!(formatar_numero(999_999), "1000000");
    }

    #[test]
    fn peca_sem_estoque_nao_entra_no_carrinho() {
        let mut carrinho = Carrinho::default();
        let erro = carrinho.adicionar(&pneu(0)).unwrap_err();

        assert!(matches!(erro, ApiError::SemEstoque(_)));
        assert!(carrinho.itens.is_empty());
    }

    #[test]
    fn peca_para_no_estoque_maximo() {
        let mut carrinho = Carrinho::default();
        let produto = pneu(2);

        carrinho.adicionar(&produto).unwrap();
        carrinho.adicionar(&produto).unwrap();
        let erro = carrinho.adicionar(&produto).unwrap_err();

        assert_eq!(erro.to_string(), "Estoque máximo atingido para Pneu Aro 15.");
        assert_eq!(carrinho.itens.len(), 1);
        assert_eq!(carrinho.itens[0].qtd, 2);
    }

    #[test]
    fn quantidade_no_limite_do_inteiro_e_recusada() {
        let mut carrinho = Carrinho::new(vec![ItemCarrinho {
            product_id: 1,
            nome: "Troca de Óleo - Sintético".into(),
            preco: dec("250.00"),
            qtd: i32::MAX,
        }]);

        let erro = carrinho.adicionar(&troca_de_oleo()).unwrap_err();

        assert!(matches!(erro, ApiError::Validacao(_)));
        assert_eq!(carrinho.itens[0].qtd, i32::MAX);
    }

    #[test]
    fn linhas_com_quantidade_zero_sao_recusadas_mesmo_no_carrinho_aberto() {
        assert!(Carrinho::default().validar_linhas().is_ok());

        let carrinho = Carrinho::new(vec![ItemCarrinho {
            product_id: 4,
            nome: "Filtro de Ar".into(),
            preco: dec("45.00"),
            qtd: 0,
        }]);
        assert!(matches!(carrinho.validar_linhas(), Err(ApiError::Validacao(_))));
    }

    #[test]
    fn servico_nao_tem_limite() {
        let mut carrinho = Carrinho::default();
        let servico = troca_de_oleo();
        for _ in 0..5 {
            carrinho.adicionar(&servico).unwrap();
        }
        assert_eq!(carrinho.itens[0].qtd, 5);
        assert_eq!(carrinho.subtotal(), dec("1250.00"));
    }

    #[test]
    fn item_do_front_end_aceita_id_do_produto() {
        let item: ItemCarrinho = serde_json::from_value(json!({
            "id": 3,
            "nome": "Pneu Aro 15",
            "sku": "PEC-001",
            "preco": 350,
            "qtd": 2,
            "categoryId": 2
        }))
        .unwrap();

        assert_eq!(item.product_id, 3);
        assert_eq!(item.qtd, 2);
    }

    #[test]
    fn nova_venda_ignora_totais_do_cliente() {
        let venda: NovaVenda = serde_json::from_value(json!({
            "numero": "000999",
            "dataHora": "19/10/2026 10:00:00",
            "subtotal": 1,
            "total": 1,
            "pagamento": "Dinheiro",
            "recebido": 800,
            "troco": 0,
            "itens": [{ "id": 3, "nome": "Pneu Aro 15", "preco": 350.0, "qtd": 2 }]
        }))
        .unwrap();

        let (carrinho, pagamento, cliente) = venda.separar();
        let totais = Totais::calcular(&carrinho, &pagamento).unwrap();
        assert_eq!(cliente, None);
        assert_eq!(totais.total, dec("700"));
        assert_eq!(totais.troco, dec("100"));
    }
}
