// LLM prompt constants for the Sketch module.

/// Decision prompt template (PT-BR). Replace `{pergunta}` and `{resposta}`
/// before sending. Enforces JSON-only output so the verdict can be parsed.
pub const DECISION_PROMPT_TEMPLATE: &str = r#"Você é um assistente que decide se um ESBOÇO/FIGURA simples ajudaria a resposta.
Contexto: o app é sobre feridas crônicas (TIME/TIMERS), mas a pergunta pode ser geral.

Responda SOMENTE em JSON válido, SEM markdown, SEM texto extra, no formato:
{"need_sketch": true/false, "reason": "...", "sketch_prompt": "..."}

Regras:
- need_sketch = true quando uma figura melhoraria MUITO a compreensão (ex.: anatomia, posicionamento, escolha de calçado/órtese, passo-a-passo de curativo, fluxogramas, comparação visual, layout de equipamento).
- need_sketch = false quando for pura explicação textual, listas simples, ou quando um desenho pode induzir erro clínico.
- Se need_sketch = false, deixe sketch_prompt como string vazia "".
- Se need_sketch = true, crie um prompt curto, bem específico, para gerar uma imagem didática, sem conteúdo chocante. Evite sangue explícito.

PERGUNTA:
{pergunta}

RESPOSTA (resumo):
{resposta}"#;

/// Builds the decision prompt for a question/answer pair. The answer is
/// expected to already be truncated to the summary window.
pub fn build_decision_prompt(question: &str, answer_summary: &str) -> String {
    DECISION_PROMPT_TEMPLATE
        .replace("{pergunta}", question)
        .replace("{resposta}", answer_summary)
}
